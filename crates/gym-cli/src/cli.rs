
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::clock::Clock;
use crate::commands::{
    AddMember,
    DeleteMember,
    ListMembers,
    ShowMember,
    ShowStats,
    TogglePayment,
    UpdateMember,
};

#[derive(Parser, Debug)]
#[clap(name = "gym", version=env!("CARGO_PKG_VERSION"))]
/// Keep track of gym members and their monthly payments
pub struct Cli {
    #[clap(long, env = "GYM_MEMBERS_DB", default_value = "members.sqlite3")]
    pub members_db: String,

    /// Use this date as today (YYYY-MM-DD)
    #[clap(long, env = "GYM_TODAY")]
    pub today: Option<NaiveDate>,

    /// Log filter, used when RUST_LOG is not set
    #[clap(long, env = "GYM_LOG", default_value = "warn")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }

    pub fn clock(&self) -> Clock {
        match self.today {
            Some(today) => Clock::pinned(today),
            None => Clock::system(),
        }
    }
}


#[derive(Subcommand, Debug)]
pub enum Command {
    /// List members
    #[clap(name = "list")]
    List(ListMembers),
    /// Show a member
    #[clap(name = "show")]
    Show(ShowMember),
    /// Show member counters
    #[clap(name = "stats")]
    Stats(ShowStats),
    /// Add a member
    #[clap(name = "add")]
    Add(AddMember),
    /// Update a member
    #[clap(name = "set")]
    Update(UpdateMember),
    /// Delete a member
    #[clap(name = "delete")]
    Delete(DeleteMember),
    /// Mark a member as paid or unpaid
    #[clap(name = "pay")]
    Pay(TogglePayment),
}
