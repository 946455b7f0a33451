// domain_registry/instructions/views/get_my_domains.rs

// external dependencies
use anchor_lang::prelude::*;

// local dependencies
use crate::{
    constants::PAGE_ITEMS_BUDGET,
    errors::RegistryError,
    state::{DomainEntry, DomainList, DomainRecord, DOMAIN_ENTRY_SEED, DOMAIN_LIST_SEED},
};

// The entries to read are passed as remaining accounts, in index order
// starting at `offset`.
#[derive(Accounts)]
pub struct GetMyDomains<'info> {
    pub controller: Signer<'info>,

    /// CHECK: the list only exists once the controller has registered a domain
    /// so it is loaded manually in the handler
    #[account(
        seeds = [DOMAIN_LIST_SEED, controller.key().as_ref()],
        bump
    )]
    pub domain_list: UncheckedAccount<'info>,
}

/// One page of names. `next_offset` is set while more entries remain.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DomainPage {
    pub names: Vec<String>,
    pub next_offset: Option<u32>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DomainRecordPage {
    pub records: Vec<DomainRecord>,
    pub next_offset: Option<u32>,
}

pub fn handler(ctx: Context<GetMyDomains>, offset: u32) -> Result<DomainPage> {
    let name_len = |name: &String| 4 + name.len();
    let (names, next_offset) = read_page(&ctx, offset, |entry| entry.name, name_len)?;

    Ok(DomainPage { names, next_offset })
}

pub fn records_handler(ctx: Context<GetMyDomains>, offset: u32) -> Result<DomainRecordPage> {
    let record_len = |record: &DomainRecord| 4 + record.name.len() + 8;
    let (records, next_offset) = read_page(&ctx, offset, DomainRecord::from, record_len)?;

    Ok(DomainRecordPage {
        records,
        next_offset,
    })
}

fn read_page<T>(
    ctx: &Context<GetMyDomains>,
    offset: u32,
    convert: impl Fn(DomainEntry) -> T,
    encoded_len: impl Fn(&T) -> usize,
) -> Result<(Vec<T>, Option<u32>)> {
    let controller = ctx.accounts.controller.key();
    let count = load_domain_list(ctx.program_id, &ctx.accounts.domain_list)?
        .map(|list| list.count)
        .unwrap_or(0);

    let entries = ctx
        .remaining_accounts
        .iter()
        .zip(offset..)
        .map(|(account, index)| {
            load_domain_entry(ctx.program_id, &controller, index, account).map(&convert)
        });

    collect_page(offset, count, entries, encoded_len)
}

/// Takes items in order until the next one would overflow the return data
/// budget or all `count` entries have been read.
pub fn collect_page<T>(
    offset: u32,
    count: u32,
    entries: impl IntoIterator<Item = Result<T>>,
    encoded_len: impl Fn(&T) -> usize,
) -> Result<(Vec<T>, Option<u32>)> {
    let remaining = count.saturating_sub(offset) as usize;
    let mut items = Vec::new();
    let mut used = 0;

    for entry in entries.into_iter().take(remaining) {
        let item = entry?;
        let len = encoded_len(&item);
        if used + len > PAGE_ITEMS_BUDGET {
            break;
        }
        used += len;
        items.push(item);
    }

    let next = offset as usize + items.len();
    let next_offset = if next < count as usize {
        Some(next as u32)
    } else {
        None
    };

    Ok((items, next_offset))
}

/// Reads a controller's domain list, or `None` if it was never created.
pub fn load_domain_list(program_id: &Pubkey, account: &AccountInfo) -> Result<Option<DomainList>> {
    if account.data_is_empty() {
        return Ok(None);
    }

    // An initialized list must be owned by this program
    require_keys_eq!(*program_id, *account.owner);

    let mut data: &[u8] = &account.try_borrow_data()?;
    Ok(Some(DomainList::try_deserialize(&mut data)?))
}

pub fn load_domain_entry(
    program_id: &Pubkey,
    controller: &Pubkey,
    index: u32,
    account: &AccountInfo,
) -> Result<DomainEntry> {
    require_keys_eq!(*program_id, *account.owner, RegistryError::InvalidEntry);

    let mut data: &[u8] = &account.try_borrow_data()?;
    let entry = DomainEntry::try_deserialize(&mut data)?;

    // The account must sit at the PDA for this controller and index
    let expected = Pubkey::create_program_address(
        &[
            DOMAIN_ENTRY_SEED,
            controller.as_ref(),
            &index.to_le_bytes(),
            &[entry.bump],
        ],
        program_id,
    )
    .map_err(|_| error!(RegistryError::InvalidEntry))?;
    require_keys_eq!(expected, *account.key, RegistryError::InvalidEntry);

    Ok(entry)
}
