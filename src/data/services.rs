//! Catalogue of utility services shown on the home page.

/// A browsable municipal service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceInfo; 6] = [
    ServiceInfo {
        id: "water",
        name: "Water Supply",
        category: "Utilities",
        description: "New connections, meter readings, and supply complaints.",
    },
    ServiceInfo {
        id: "electricity",
        name: "Electricity",
        category: "Utilities",
        description: "Bill payment, outage reports, and load changes.",
    },
    ServiceInfo {
        id: "waste",
        name: "Waste Collection",
        category: "Sanitation",
        description: "Pickup schedules and missed-collection complaints.",
    },
    ServiceInfo {
        id: "property-tax",
        name: "Property Tax",
        category: "Revenue",
        description: "Assessment, dues, and online payment.",
    },
    ServiceInfo {
        id: "birth-cert",
        name: "Birth Certificate",
        category: "Records",
        description: "Apply for and download birth certificates.",
    },
    ServiceInfo {
        id: "trade-license",
        name: "Trade License",
        category: "Licensing",
        description: "New licenses and annual renewals.",
    },
];
