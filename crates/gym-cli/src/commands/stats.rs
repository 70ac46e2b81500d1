use anyhow::Result;
use clap::Args;

use gym_data::compute_stats;
use gym_db::MemberStore;

use crate::clock::Clock;
use crate::formatting::PrintFormatted;

#[derive(Args, Debug)]
pub struct ShowStats {}

impl ShowStats {
    /// Print the member counters for today
    pub fn run(self, store: &MemberStore, clock: &Clock) -> Result<()> {
        let stats = compute_stats(store.members(), clock.today);
        println!();
        stats.print_formatted();
        println!();
        Ok(())
    }
}
