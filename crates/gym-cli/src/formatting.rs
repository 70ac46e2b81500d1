use uuid::Uuid;

use gym_data::{Member, NewMember, PaymentStatus, Stats};

macro_rules! next_attr {
    ($old:ident, $new:ident, $attr:ident) => {
        if $old.$attr != $new.$attr {
            format!(" -> {}", $new.$attr)
        } else {
            "".to_string()
        }
    };
}

pub trait PrintFormatted {
    fn print_formatted(&self);
}

/// Status as shown to the user.
pub fn status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "Paid",
        PaymentStatus::Unpaid => "Pending",
    }
}

/// First block of the id, enough to pick a member on the command line.
pub fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// Headline for a member listing.
pub fn summary(found: usize, total: usize) -> String {
    match (found, total) {
        (_, 0) => "No members registered yet.".to_string(),
        (0, _) => "No members match these criteria.".to_string(),
        (1, _) => "1 member found.".to_string(),
        (n, _) => format!("{} members found.", n),
    }
}

impl PrintFormatted for Member {
    fn print_formatted(&self) {
        println!("ID:\t\t\t{}", self.id);
        println!("Name:\t\t\t{}", self.name);
        println!("Email:\t\t\t{}", self.email);
        println!("Password:\t\t{}", self.password);
        println!("Payment Day:\t\t{}", self.payment_day);
        println!("Cycle:\t\t\t{}", self.current_cycle_month);
        println!("Status:\t\t\t{}", status_label(self.payment_status));
        println!("Created:\t\t{}", self.created_at.format("%Y-%m-%d %H:%M"));
        println!("Last Update:\t\t{}", self.updated_at.format("%Y-%m-%d %H:%M"));
    }
}

impl PrintFormatted for NewMember {
    fn print_formatted(&self) {
        println!("Name:\t\t\t{}", self.name);
        println!("Email:\t\t\t{}", self.email);
        println!("Password:\t\t{}", self.password);
        println!("Payment Day:\t\t{}", self.payment_day);
        println!("Cycle:\t\t\t{}", self.current_cycle_month);
        println!("Status:\t\t\t{}", status_label(self.payment_status));
    }
}

impl PrintFormatted for (Member, Member) {
    fn print_formatted(&self) {
        let (old, new) = self;
        let old_status = status_label(old.payment_status);
        let new_status = status_label(new.payment_status);
        let next_status = if old_status != new_status {
            format!(" -> {}", new_status)
        } else {
            "".to_string()
        };

        let next_name = next_attr!(old, new, name);
        println!("Name:\t\t\t{}{}", old.name, next_name);
        let next_email = next_attr!(old, new, email);
        println!("Email:\t\t\t{}{}", old.email, next_email);
        let next_password = next_attr!(old, new, password);
        println!("Password:\t\t{}{}", old.password, next_password);
        let next_payment_day = next_attr!(old, new, payment_day);
        println!("Payment Day:\t\t{}{}", old.payment_day, next_payment_day);
        let next_cycle = next_attr!(old, new, current_cycle_month);
        println!("Cycle:\t\t\t{}{}", old.current_cycle_month, next_cycle);
        println!("Status:\t\t\t{}{}", old_status, next_status);
    }
}

impl PrintFormatted for Vec<&Member> {
    fn print_formatted(&self) {
        println!(
            "{:<8}\t{:<24}\t{:<30}\t{:>3}\t{:<7}\t{}",
            "ID", "Name", "Email", "Day", "Cycle", "Status"
        );
        println!("{:-<100}", "-");

        for member in self {
            println!(
                "{:<8}\t{:<24}\t{:<30}\t{:>3}\t{:<7}\t{}",
                short_id(&member.id),
                member.name,
                member.email,
                member.payment_day,
                member.current_cycle_month.to_string(),
                status_label(member.payment_status),
            );
        }
    }
}

impl PrintFormatted for Stats {
    fn print_formatted(&self) {
        println!("Total Members:\t\t{}", self.total);
        println!("Paid:\t\t\t{}", self.paid_this_month);
        println!("Pending:\t\t{}", self.pending);
        println!("Due Soon:\t\t{}", self.expiring_soon);
    }
}
