//! Advisory validation for calculator inputs
//!
//! The formula engine accepts any numbers. These checks flag values that are
//! arithmetically fine but almost certainly a typo or a half-finished edit,
//! so that a caller can warn about them. They never stop an evaluation.

use crate::{
    calculator::Inputs,
    error::CalcError,
    fees::FeeSchedule,
    plan::{Billing, PlanInputs},
    referral::AffiliateProgramInputs,
};

/// Upper bound for a commission rate in percent
pub const MAX_COMMISSION_PCT: f64 = 100.0;

fn invalid(field: &'static str, value: f64, reason: &'static str) -> CalcError {
    CalcError::InvalidInput {
        field,
        value,
        reason,
    }
}

/// Check a fee schedule
pub fn validate_fee_schedule(fees: &FeeSchedule) -> Vec<CalcError> {
    let mut findings = Vec::new();
    if !fees.percentage_fee_rate.is_finite() || fees.percentage_fee_rate < 0.0 {
        findings.push(invalid(
            "fees.percentage_fee_rate",
            fees.percentage_fee_rate,
            "fee rate should be a non-negative number",
        ));
    } else if fees.percentage_fee_rate >= 1.0 {
        findings.push(invalid(
            "fees.percentage_fee_rate",
            fees.percentage_fee_rate,
            "fee rate at or above 100% leaves no revenue",
        ));
    }
    if !fees.fixed_fee_per_charge.is_finite() || fees.fixed_fee_per_charge < 0.0 {
        findings.push(invalid(
            "fees.fixed_fee_per_charge",
            fees.fixed_fee_per_charge,
            "fixed fee should be a non-negative number",
        ));
    }
    findings
}

/// Check one plan; `prefix` names the plan in the reported field
pub fn validate_plan(prefix: PlanField, plan: &PlanInputs) -> Vec<CalcError> {
    let mut findings = Vec::new();
    if !plan.price.is_finite() || plan.price < 0.0 {
        findings.push(invalid(
            prefix.price(),
            plan.price,
            "price should be a non-negative number",
        ));
    }
    if !plan.commission_rate.is_finite() || plan.commission_rate < 0.0 {
        findings.push(invalid(
            prefix.commission_rate(),
            plan.commission_rate,
            "commission should be a non-negative percentage",
        ));
    } else if plan.commission_rate > MAX_COMMISSION_PCT {
        findings.push(invalid(
            prefix.commission_rate(),
            plan.commission_rate,
            "commission above 100% pays out more than the price",
        ));
    }
    if plan.billing == (Billing::Recurring { retention_periods: 0 }) {
        findings.push(invalid(
            prefix.retention_periods(),
            0.0,
            "retention of zero periods means the customer is never charged",
        ));
    }
    findings
}

/// Plan whose fields are being validated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanField {
    Monthly,
    Annual,
}

impl PlanField {
    const fn price(self) -> &'static str {
        match self {
            Self::Monthly => "monthly.price",
            Self::Annual => "annual.price",
        }
    }

    const fn commission_rate(self) -> &'static str {
        match self {
            Self::Monthly => "monthly.commission_rate",
            Self::Annual => "annual.commission_rate",
        }
    }

    const fn retention_periods(self) -> &'static str {
        match self {
            Self::Monthly => "monthly.retention_periods",
            Self::Annual => "annual.retention_periods",
        }
    }
}

/// Check affiliate program counts
pub fn validate_affiliate_program(program: &AffiliateProgramInputs) -> Vec<CalcError> {
    [
        ("affiliate.active_subscribers", program.active_subscribers),
        ("affiliate.active_affiliates", program.active_affiliates),
        (
            "affiliate.avg_monthly_referrals_per_affiliate",
            program.avg_monthly_referrals_per_affiliate,
        ),
        (
            "affiliate.avg_annual_referrals_per_affiliate",
            program.avg_annual_referrals_per_affiliate,
        ),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_finite() || *value < 0.0)
    .map(|(field, value)| invalid(field, value, "count should be a non-negative number"))
    .collect()
}

/// Collect every advisory finding for a full input record
///
/// An empty vector means nothing looked suspicious.
#[must_use]
pub fn validate_inputs(inputs: &Inputs) -> Vec<CalcError> {
    let mut findings = validate_fee_schedule(&inputs.fees);
    findings.extend(validate_plan(PlanField::Monthly, &inputs.monthly));
    findings.extend(validate_plan(PlanField::Annual, &inputs.annual));
    findings.extend(validate_affiliate_program(&inputs.affiliate));

    let tier_price = inputs.tier_monthly_price();
    if !tier_price.is_finite() || tier_price < 0.0 {
        findings.push(invalid(
            "tier_pricing",
            tier_price,
            "tier price should be a non-negative number",
        ));
    }
    findings
}
