//! Monthly cost estimation
//!
//! [`adjust_costs`] turns a country's base ranges into a personalised estimate by
//! applying one multiplier per answered question. Every multiplicative step rounds
//! both bounds to the nearest integer before the next step reads them, so the order
//! of steps is part of the result:
//!
//! 1. accommodation, food habits and transport scale `rent`, `food`, `transport`
//! 2. course type scales `misc`
//! 3. intake scales the current `rent`, `food`, `transport`
//! 4. leisure scales the current `misc`
//! 5. mobile scales the current `misc` by a tenth of its deviation from 1
//!
//! [`quick_estimate`] ignores the questionnaire and reports the cheapest figure
//! the data allows.

use crate::core::data::{country_key, CostTable, FALLBACK_COUNTRY_KEY};
use crate::core::error::EstimateError;
use crate::core::models::{
    AdjustedCosts, CostRange, CountryCosts, ExpenseBreakdown, QuestionnaireAnswers,
};
use crate::{debug, warn};

/// Share of the mobile multiplier's deviation that reaches `misc`
pub const MOBILE_IMPACT: f64 = 0.1;

/// Minimum monthly leisure spend added by the quick estimate
pub const MIN_LEISURE_COST: f64 = 30.0;

/// Minimum monthly mobile spend added by the quick estimate
pub const MIN_MOBILE_COST: f64 = 20.0;

/// Quick estimate shown when the cost data cannot be loaded
pub const FALLBACK_BREAKDOWN: ExpenseBreakdown = ExpenseBreakdown {
    accommodation: 400.0,
    food: 250.0,
    transport: 80.0,
    leisure: 50.0,
    mobile: 25.0,
    miscellaneous: 100.0,
    total: 905.0,
};

/// Adjusted estimate shown when the cost data cannot be loaded
pub const FALLBACK_ADJUSTED_COSTS: AdjustedCosts = AdjustedCosts {
    rent: CostRange::new_unchecked(600.0, 1200.0),
    food: CostRange::new_unchecked(150.0, 300.0),
    transport: CostRange::new_unchecked(70.0, 100.0),
    misc: CostRange::new_unchecked(100.0, 250.0),
    average_total: CostRange::new_unchecked(920.0, 1850.0),
};

/// Find the base costs for a country by display name.
///
/// Names are matched case-insensitively with whitespace removed. Unknown
/// countries resolve to Germany.
///
/// # Errors
/// Returns `DataUnavailable` when neither the country nor the Germany fallback
/// is in the table.
pub fn lookup_country_costs<'t>(
    table: &'t CostTable,
    country_name: &str,
) -> Result<&'t CountryCosts, EstimateError> {
    let key = country_key(country_name);
    if let Some(entry) = table.get(&key) {
        return Ok(entry);
    }

    debug!("No cost data for '{country_name}' (key '{key}'), using {FALLBACK_COUNTRY_KEY}");
    table.get(FALLBACK_COUNTRY_KEY).ok_or_else(|| {
        EstimateError::unavailable(format!(
            "no entry for '{key}' and fallback '{FALLBACK_COUNTRY_KEY}' is missing"
        ))
    })
}

/// Scale `range` by `multiplier` when an answer supplied one
fn apply(range: CostRange, multiplier: Option<f64>) -> CostRange {
    multiplier.map_or(range, |m| range.scaled(m))
}

/// Apply questionnaire answers to a country's base costs.
///
/// Pure: identical inputs produce bit-identical output. Unspecified answers
/// leave their category untouched. `average_total` from the base is never read;
/// the result's total is the element-wise sum of the adjusted categories.
#[must_use]
pub fn adjust_costs(base: &CountryCosts, answers: &QuestionnaireAnswers) -> AdjustedCosts {
    let mut rent = apply(base.rent.envelope(), answers.accommodation.multiplier());
    let mut food = apply(base.food.envelope(), answers.food_habits.multiplier());
    let mut transport = apply(base.transport.envelope(), answers.transport.multiplier());
    let mut misc = apply(base.misc.envelope(), answers.course_type.multiplier());

    if let Some(m) = answers.intake.multiplier() {
        rent = rent.scaled(m);
        food = food.scaled(m);
        transport = transport.scaled(m);
    }

    misc = apply(misc, answers.leisure.multiplier());

    if let Some(m) = answers.mobile.multiplier() {
        let adjustment = (m - 1.0) * MOBILE_IMPACT;
        misc = misc.scaled(1.0 + adjustment);
    }

    AdjustedCosts {
        rent,
        food,
        transport,
        misc,
        average_total: CostRange::sum([&rent, &food, &transport, &misc]),
    }
}

/// Cheapest monthly figure for a country, without questionnaire answers.
///
/// Takes the minimum of each base category and adds the fixed leisure and
/// mobile minimums.
#[must_use]
pub fn quick_estimate(base: &CountryCosts) -> ExpenseBreakdown {
    let accommodation = base.rent.minimum();
    let food = base.food.minimum();
    let transport = base.transport.minimum();
    let miscellaneous = base.misc.minimum();
    let leisure = MIN_LEISURE_COST;
    let mobile = MIN_MOBILE_COST;

    ExpenseBreakdown {
        accommodation,
        food,
        transport,
        leisure,
        mobile,
        miscellaneous,
        total: accommodation + food + transport + leisure + mobile + miscellaneous,
    }
}

/// Quick estimate that always produces a number.
///
/// Any data source failure, including a table without the fallback country,
/// yields [`FALLBACK_BREAKDOWN`].
#[must_use]
pub fn quick_estimate_or_fallback(
    source: Result<&CostTable, &EstimateError>,
    country_name: &str,
) -> ExpenseBreakdown {
    match source
        .ok()
        .and_then(|table| lookup_country_costs(table, country_name).ok())
    {
        Some(base) => quick_estimate(base),
        None => {
            warn!("Cost data unavailable for '{country_name}', showing default estimate");
            FALLBACK_BREAKDOWN
        }
    }
}

/// Personalised estimate that always produces a result.
///
/// Any data source failure yields [`FALLBACK_ADJUSTED_COSTS`], unadjusted.
#[must_use]
pub fn estimate_or_fallback(
    source: Result<&CostTable, &EstimateError>,
    country_name: &str,
    answers: &QuestionnaireAnswers,
) -> AdjustedCosts {
    match source
        .ok()
        .and_then(|table| lookup_country_costs(table, country_name).ok())
    {
        Some(base) => adjust_costs(base, answers),
        None => {
            warn!("Cost data unavailable for '{country_name}', showing default costs");
            FALLBACK_ADJUSTED_COSTS
        }
    }
}
