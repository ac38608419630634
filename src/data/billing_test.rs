use super::*;

#[test]
fn format_rupees_pads_paise() {
    assert_eq!(format_rupees(0), "₹0.00");
    assert_eq!(format_rupees(5), "₹0.05");
    assert_eq!(format_rupees(48_500), "₹485.00");
    assert_eq!(format_rupees(312_750), "₹3127.50");
}

#[test]
fn outstanding_sums_only_unpaid_bills() {
    let expected: u64 = BILLS
        .iter()
        .filter(|b| !b.paid)
        .map(|b| b.amount_paise)
        .sum();
    assert_eq!(outstanding_paise(), expected);
    assert!(expected > 0);
}
