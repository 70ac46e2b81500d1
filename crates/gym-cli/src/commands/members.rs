use anyhow::{anyhow, Result};
use clap::Args;
use tracing::info;

use gym_data::{
    select,
    MemberPatch,
    MemberView,
    NewMember,
    PaymentStatus,
    StatusFilter,
    Validate,
};
use gym_db::MemberStore;

use crate::clock::Clock;
use crate::commands::{confirm, find_member};
use crate::formatting::{status_label, summary, PrintFormatted};

#[derive(Args, Debug)]
pub struct ListMembers {
    /// One of: all, pending, paid, expiring
    #[clap(short, long, default_value_t = StatusFilter::All)]
    pub filter: StatusFilter,
    /// Search in names and emails
    #[clap(short, long)]
    pub search: Option<String>,
}

impl ListMembers {
    /// Run the command and list members
    pub fn run(self, store: &MemberStore, clock: &Clock) -> Result<()> {
        let view = MemberView {
            filter: self.filter,
            query: self.search.unwrap_or_default(),
        };
        let members = select(store.members(), &view, clock.today);

        println!("{}", summary(members.len(), store.len()));
        if !members.is_empty() {
            members.print_formatted();
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ShowMember {
    #[clap(short, long)]
    pub id: String,
}

impl ShowMember {
    /// Run the command and show a member
    pub fn run(self, store: &MemberStore) -> Result<()> {
        let member = find_member(store, &self.id)?;
        println!();
        member.print_formatted();
        println!();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddMember {
    #[clap(short, long)]
    pub name: String,
    #[clap(short, long)]
    pub email: String,
    #[clap(short, long)]
    pub password: String,
    /// Day of the month the payment is due
    #[clap(short = 'd', long, default_value_t = 1)]
    pub payment_day: u8,
    /// Member has already paid this month
    #[clap(long)]
    pub paid: bool,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl AddMember {
    /// Run the command and add a member
    pub async fn run(self, store: &mut MemberStore, clock: &Clock) -> Result<()> {
        let payment_status = if self.paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        };
        let member = NewMember {
            name: self.name,
            email: self.email,
            password: self.password,
            payment_day: self.payment_day,
            payment_status,
            current_cycle_month: clock.cycle(),
        };
        member.validate()?;

        println!();
        member.print_formatted();
        println!();

        if !confirm(self.yes, "Add member?")? {
            return Ok(());
        }

        let member = store.add(member, clock.now).await;
        info!(id = %member.id, "member added");
        println!("Member added with id {}.", member.id);

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct UpdateMember {
    #[clap(short, long)]
    pub id: String,
    #[clap(short, long)]
    pub name: Option<String>,
    #[clap(short, long)]
    pub email: Option<String>,
    #[clap(short, long)]
    pub password: Option<String>,
    #[clap(short = 'd', long)]
    pub payment_day: Option<u8>,
    /// paid or unpaid
    #[clap(short, long)]
    pub status: Option<PaymentStatus>,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl UpdateMember {
    /// Run command and update a member
    pub async fn run(self, store: &mut MemberStore, clock: &Clock) -> Result<()> {
        let member = find_member(store, &self.id)?.clone();
        let patch = MemberPatch {
            name: self.name,
            email: self.email,
            password: self.password,
            payment_day: self.payment_day,
            payment_status: self.status,
            ..Default::default()
        };
        if patch.is_empty() {
            return Err(anyhow!("Nothing to update."));
        }

        let mut update = member.clone();
        update.apply(patch.clone());
        update.validate()?;

        println!();
        (member.clone(), update).print_formatted();
        println!();

        if !confirm(self.yes, "Update member?")? {
            return Ok(());
        }

        store.update(member.id, patch, clock.now).await;
        info!(id = %member.id, "member updated");
        println!("Member updated.");

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteMember {
    #[clap(short, long)]
    pub id: String,
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl DeleteMember {
    pub async fn run(&self, store: &mut MemberStore) -> Result<()> {
        let member = find_member(store, &self.id)?.clone();
        println!();
        member.print_formatted();
        println!();

        if !confirm(self.yes, "Delete member?")? {
            return Ok(());
        }

        store.delete(member.id).await;
        info!(id = %member.id, "member deleted");
        println!("Member deleted.");

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct TogglePayment {
    #[clap(short, long)]
    pub id: String,
}

impl TogglePayment {
    /// Flip the payment status of a member
    pub async fn run(&self, store: &mut MemberStore, clock: &Clock) -> Result<()> {
        let id = find_member(store, &self.id)?.id;
        let member = store
            .toggle_payment(id, clock.cycle(), clock.now)
            .await
            .ok_or_else(|| anyhow!("Member {} not found.", id))?;

        println!(
            "{} is now {} for {}.",
            member.name,
            status_label(member.payment_status).to_lowercase(),
            member.current_cycle_month,
        );
        Ok(())
    }
}
