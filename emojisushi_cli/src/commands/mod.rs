pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod locations;

use clap::Args;
use emojisushi_api::PageParams;

/// Offset/limit flags shared by the list commands.
#[derive(Args, Clone, Debug, Default)]
pub struct PageArgs {
    /// Number of records to skip
    #[arg(long)]
    pub offset: Option<i64>,

    /// Maximum number of records to return
    #[arg(long)]
    pub limit: Option<i64>,
}

impl PageArgs {
    pub fn to_params(&self) -> PageParams {
        let mut params = PageParams::default();
        if let Some(offset) = self.offset {
            params = params.with_offset(offset);
        }
        if let Some(limit) = self.limit {
            params = params.with_limit(limit);
        }
        params
    }
}
