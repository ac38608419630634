#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

/// A mock utility bill shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bill {
    pub id: &'static str,
    pub service: &'static str,
    pub period: &'static str,
    /// Amount due in paise.
    pub amount_paise: u64,
    pub due_date: &'static str,
    pub paid: bool,
}

pub const BILLS: [Bill; 4] = [
    Bill {
        id: "WTR-2025-07",
        service: "Water Supply",
        period: "July 2025",
        amount_paise: 48_500,
        due_date: "2025-08-15",
        paid: true,
    },
    Bill {
        id: "ELE-2025-07",
        service: "Electricity",
        period: "July 2025",
        amount_paise: 312_750,
        due_date: "2025-08-20",
        paid: true,
    },
    Bill {
        id: "WTR-2025-08",
        service: "Water Supply",
        period: "August 2025",
        amount_paise: 51_200,
        due_date: "2025-09-15",
        paid: false,
    },
    Bill {
        id: "ELE-2025-08",
        service: "Electricity",
        period: "August 2025",
        amount_paise: 298_000,
        due_date: "2025-09-20",
        paid: false,
    },
];

/// Format a paise amount as rupees, e.g. `312_750` renders as `"₹3127.50"`.
pub fn format_rupees(amount_paise: u64) -> String {
    format!("₹{}.{:02}", amount_paise / 100, amount_paise % 100)
}

/// Total of unpaid bills, in paise.
pub fn outstanding_paise() -> u64 {
    BILLS
        .iter()
        .filter(|bill| !bill.paid)
        .map(|bill| bill.amount_paise)
        .sum()
}
