use anchor_lang::prelude::*;
use spl_account_compression::state::CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1;
use crate::constants::*;
use crate::errors::TicketingError;

/// Shape of the concurrent Merkle tree that stores ticket cNFTs
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    pub max_depth: u8,
    pub max_buffer_size: u16,
    pub canopy_depth: u8,
}

impl TreeConfig {
    /// Configuration used for the ledger's ticket tree.
    /// Supports 16,384 tickets with short proofs
    pub fn optimal() -> Self {
        Self {
            max_depth: TREE_MAX_DEPTH,
            max_buffer_size: TREE_MAX_BUFFER_SIZE,
            canopy_depth: TREE_CANOPY_DEPTH,
        }
    }

    /// Number of leaves, and therefore tickets, the tree can hold
    pub fn capacity(&self) -> u32 {
        1u32 << self.max_depth
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.max_depth >= 3 && self.max_depth <= 30,
            TicketingError::InvalidTreeDepth
        );
        require!(
            self.max_buffer_size >= 8 && self.max_buffer_size <= 2048,
            TicketingError::InvalidBufferSize
        );
        require!(
            self.canopy_depth <= self.max_depth,
            TicketingError::InvalidCanopyDepth
        );
        Ok(())
    }

    /// Bytes the compression program expects in the tree account.
    pub fn account_size(&self) -> usize {
        let depth = self.max_depth as usize;
        // Changelog entries and the rightmost proof share this layout:
        // depth nodes, one extra node, a u32 index and u32 padding.
        let path_size = 32 * depth + 32 + 4 + 4;
        let merkle_tree_size = 3 * 8
            + (self.max_buffer_size as usize).saturating_mul(path_size)
            + path_size;
        let canopy_size = ((1usize << (self.canopy_depth as usize + 1)) - 2) * 32;

        CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1
            .saturating_add(merkle_tree_size)
            .saturating_add(canopy_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spl_concurrent_merkle_tree::concurrent_merkle_tree::ConcurrentMerkleTree;

    #[test]
    fn test_optimal_config() {
        let config = TreeConfig::optimal();
        assert_eq!(config.max_depth, 14);
        assert_eq!(config.max_buffer_size, 64);
        assert_eq!(config.canopy_depth, 10);
        assert_eq!(config.capacity(), 16_384);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let valid_config = TreeConfig::optimal();

        let invalid_depth = TreeConfig {
            max_depth: 31,
            ..valid_config
        };
        assert!(invalid_depth.validate().is_err());

        let invalid_buffer = TreeConfig {
            max_buffer_size: 5,
            ..valid_config
        };
        assert!(invalid_buffer.validate().is_err());

        let invalid_canopy = TreeConfig {
            canopy_depth: 12,
            max_depth: 10,
            ..valid_config
        };
        assert!(invalid_canopy.validate().is_err());
    }

    #[test]
    fn test_account_size_matches_compression_layout() {
        let no_canopy = TreeConfig {
            canopy_depth: 0,
            ..TreeConfig::optimal()
        };
        assert_eq!(
            no_canopy.account_size(),
            CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1
                + std::mem::size_of::<ConcurrentMerkleTree<14, 64>>()
        );
        assert_eq!(no_canopy.account_size(), 31_800);

        let config = TreeConfig::optimal();
        assert_eq!(
            config.account_size(),
            no_canopy.account_size() + ((1 << 11) - 2) * 32
        );
    }
}
