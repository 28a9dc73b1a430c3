use anchor_lang::prelude::*;
use mpl_bubblegum::instructions::MintV1CpiBuilder;
use mpl_bubblegum::types::{Creator, MetadataArgs, TokenProgramVersion, TokenStandard};
use crate::constants::{LEDGER_SEED, MAX_NFT_NAME, TICKET_SYMBOL};
use crate::state::Event;

/// Leaf metadata for a ticket cNFT
pub fn create_ticket_metadata(event: &Event, ticket_id: u64, uri: &str) -> MetadataArgs {
    let name: String = format!("{} #{}", event.name(), ticket_id)
        .chars()
        .take(MAX_NFT_NAME)
        .collect();

    MetadataArgs {
        name,
        symbol: TICKET_SYMBOL.to_string(),
        uri: uri.to_string(),
        seller_fee_basis_points: 0,
        primary_sale_happened: true,
        is_mutable: false,
        edition_nonce: None,
        token_standard: Some(TokenStandard::NonFungible),
        collection: None,
        uses: None,
        token_program_version: TokenProgramVersion::Original,
        creators: vec![
            Creator {
                address: event.organizer,
                verified: false,
                share: 100,
            }
        ],
    }
}

/// Derive asset ID for a compressed NFT
pub fn get_asset_id(tree: &Pubkey, nonce: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            b"asset",
            tree.as_ref(),
            &nonce.to_le_bytes(),
        ],
        &mpl_bubblegum::ID,
    ).0
}

/// Accounts Bubblegum needs to append a ticket leaf to the ledger's tree
pub struct TicketMintAccounts<'a, 'info> {
    pub bubblegum_program: &'a AccountInfo<'info>,
    pub tree_authority: &'a AccountInfo<'info>,
    pub merkle_tree: &'a AccountInfo<'info>,
    pub ledger: &'a AccountInfo<'info>,
    pub buyer: &'a AccountInfo<'info>,
    pub log_wrapper: &'a AccountInfo<'info>,
    pub compression_program: &'a AccountInfo<'info>,
    pub system_program: &'a AccountInfo<'info>,
}

/// Mints a ticket cNFT to the buyer, signed by the ledger as tree creator.
pub fn mint_ticket_cnft(
    accounts: &TicketMintAccounts,
    metadata: MetadataArgs,
    ledger_bump: u8,
) -> Result<()> {
    let bump = [ledger_bump];
    let ledger_seeds: &[&[u8]] = &[LEDGER_SEED, &bump];

    MintV1CpiBuilder::new(accounts.bubblegum_program)
        .tree_config(accounts.tree_authority)
        .leaf_owner(accounts.buyer)
        .leaf_delegate(accounts.buyer)
        .merkle_tree(accounts.merkle_tree)
        .payer(accounts.buyer)
        .tree_creator_or_delegate(accounts.ledger)
        .log_wrapper(accounts.log_wrapper)
        .compression_program(accounts.compression_program)
        .system_program(accounts.system_program)
        .metadata(metadata)
        .invoke_signed(&[ledger_seeds])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CreateEventParams, Event, PaymentMethod};

    fn event_named(name: &str) -> Event {
        let params = CreateEventParams {
            name: name.to_string(),
            ticket_price: 100,
            max_ticket_count: 2,
        };
        Event::open(0, Pubkey::new_unique(), &params, PaymentMethod::Native, 0, 255).unwrap()
    }

    #[test]
    fn test_ticket_metadata() {
        let event = event_named("Conf");
        let metadata = create_ticket_metadata(&event, 7, "https://example.com/7.json");

        assert_eq!(metadata.name, "Conf #7");
        assert_eq!(metadata.symbol, "TKT");
        assert_eq!(metadata.uri, "https://example.com/7.json");
        assert_eq!(metadata.creators.len(), 1);
        assert_eq!(metadata.creators[0].address, event.organizer);
        assert_eq!(metadata.creators[0].share, 100);
    }

    #[test]
    fn test_ticket_name_is_truncated() {
        let event = event_named(&"X".repeat(32));
        let metadata = create_ticket_metadata(&event, 12_345, "");
        assert_eq!(metadata.name.len(), MAX_NFT_NAME);
    }

    #[test]
    fn test_asset_ids_are_unique_per_nonce() {
        let tree = Pubkey::new_unique();
        assert_eq!(get_asset_id(&tree, 0), get_asset_id(&tree, 0));
        assert_ne!(get_asset_id(&tree, 0), get_asset_id(&tree, 1));
        assert_ne!(get_asset_id(&tree, 0), get_asset_id(&Pubkey::new_unique(), 0));
    }
}
