//! Static service catalog with base-currency prices.
//!
//! Prices are authored in USD; conversion and discounting happen at quote
//! time. The catalog is compiled in — the admin document can override
//! rates, not prices.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Billing cadence for a plan.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BillingPeriod {
    OneTime,
    Monthly,
    Yearly,
}

/// Catalog section a plan belongs to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ServiceCategory {
    WebsiteDevelopment,
    CloudHosting,
    Maintenance,
}

/// A sellable plan with its base-currency price.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePlan {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
    pub base_price: Decimal,
    pub period: BillingPeriod,
    /// The price is a starting point rather than a fixed total.
    pub open_ended: bool,
}

pub const CATALOG: &[ServicePlan] = &[
    ServicePlan {
        id: "web-basic",
        name: "Basic Website",
        description: "5 pages",
        category: ServiceCategory::WebsiteDevelopment,
        base_price: dec!(499),
        period: BillingPeriod::OneTime,
        open_ended: false,
    },
    ServicePlan {
        id: "web-corporate",
        name: "Corporate Website",
        description: "Full-featured business site",
        category: ServiceCategory::WebsiteDevelopment,
        base_price: dec!(999),
        period: BillingPeriod::OneTime,
        open_ended: false,
    },
    ServicePlan {
        id: "web-ecommerce",
        name: "E-commerce Website",
        description: "Online store with payment integration",
        category: ServiceCategory::WebsiteDevelopment,
        base_price: dec!(1499),
        period: BillingPeriod::OneTime,
        open_ended: false,
    },
    ServicePlan {
        id: "web-enterprise",
        name: "Enterprise Custom Solution",
        description: "Custom enterprise-grade solution",
        category: ServiceCategory::WebsiteDevelopment,
        base_price: dec!(2999),
        period: BillingPeriod::OneTime,
        open_ended: true,
    },
    ServicePlan {
        id: "hosting-basic",
        name: "Basic Hosting",
        description: "5 GB space",
        category: ServiceCategory::CloudHosting,
        base_price: dec!(15),
        period: BillingPeriod::Monthly,
        open_ended: false,
    },
    ServicePlan {
        id: "hosting-business",
        name: "Business Cloud",
        description: "50 GB space",
        category: ServiceCategory::CloudHosting,
        base_price: dec!(49),
        period: BillingPeriod::Monthly,
        open_ended: false,
    },
    ServicePlan {
        id: "hosting-enterprise",
        name: "Enterprise Cloud",
        description: "Unlimited space",
        category: ServiceCategory::CloudHosting,
        base_price: dec!(99),
        period: BillingPeriod::Monthly,
        open_ended: false,
    },
    ServicePlan {
        id: "maintenance-monthly",
        name: "Monthly Maintenance",
        description: "Website updates & security",
        category: ServiceCategory::Maintenance,
        base_price: dec!(59),
        period: BillingPeriod::Monthly,
        open_ended: false,
    },
    ServicePlan {
        id: "maintenance-annual",
        name: "Annual Maintenance",
        description: "Full year coverage + discounts",
        category: ServiceCategory::Maintenance,
        base_price: dec!(499),
        period: BillingPeriod::Yearly,
        open_ended: false,
    },
];

/// Looks a plan up by its stable id.
pub fn plan(id: &str) -> Option<&'static ServicePlan> {
    CATALOG.iter().find(|plan| plan.id == id)
}

/// All plans in a category, in catalog order.
pub fn plans_in(category: ServiceCategory) -> impl Iterator<Item = &'static ServicePlan> {
    CATALOG.iter().filter(move |plan| plan.category == category)
}
