use chrono::NaiveDate;

use crate::models::addon::{AddOn, AddOnFrequency, AddOnPricing};
use crate::models::quote::{AddOnCharge, NightlyPrice, StayPriceResult, StayQuote};
use crate::models::rate::{EffectiveRate, RateRule};
use crate::models::room::Room;
use crate::services::rate_resolver::RateResolver;

/// Adults covered by a room's base rate
pub const INCLUDED_ADULTS: u32 = 2;

pub struct PricingService;

impl PricingService {
    /// Price of one night for the given occupancy
    pub fn nightly_price(rate: &EffectiveRate, adults: u32, children: u32) -> f64 {
        let extra_adults = adults.saturating_sub(INCLUDED_ADULTS);
        rate.nightly_base
            + f64::from(extra_adults) * rate.extra_adult_surcharge
            + f64::from(children) * rate.extra_child_surcharge
    }

    /// Price every night in `[check_in, check_out)`. A checkout on or before
    /// the checkin gives an empty breakdown and a zero total.
    pub fn price_stay(
        room: &Room,
        check_in: NaiveDate,
        check_out: NaiveDate,
        adults: u32,
        children: u32,
        rates: &[RateRule],
    ) -> StayPriceResult {
        let nights = (check_out - check_in).num_days();

        let breakdown: Vec<NightlyPrice> = check_in
            .iter_days()
            .take(nights.max(0) as usize)
            .map(|date| {
                let rate = RateResolver::resolve(date, room, rates);
                NightlyPrice {
                    date,
                    price: Self::nightly_price(&rate, adults, children),
                }
            })
            .collect();

        let total = breakdown.iter().map(|night| night.price).sum();

        StayPriceResult {
            nights,
            breakdown,
            total,
        }
    }

    /// Cost of one add-on: price, times guests if per person, times nights if per night
    pub fn calculate_add_on_cost(add_on: &AddOn, adults: u32, children: u32, nights: i64) -> f64 {
        let mut cost = add_on.price;
        if add_on.pricing == AddOnPricing::PerPerson {
            cost *= f64::from(adults) + f64::from(children);
        }
        if add_on.frequency == AddOnFrequency::PerNight {
            cost *= nights.max(0) as f64;
        }
        cost
    }

    pub fn calculate_add_on_total(add_ons: &[&AddOn], adults: u32, children: u32, nights: i64) -> f64 {
        add_ons
            .iter()
            .map(|add_on| Self::calculate_add_on_cost(add_on, adults, children, nights))
            .sum()
    }

    /// Full priced itinerary: stay breakdown plus selected add-ons
    pub fn quote(
        room: &Room,
        check_in: NaiveDate,
        check_out: NaiveDate,
        adults: u32,
        children: u32,
        rates: &[RateRule],
        add_ons: &[&AddOn],
    ) -> StayQuote {
        let stay = Self::price_stay(room, check_in, check_out, adults, children, rates);

        let charges: Vec<AddOnCharge> = add_ons
            .iter()
            .map(|add_on| AddOnCharge {
                id: add_on.id.clone(),
                name: add_on.name.clone(),
                amount: Self::calculate_add_on_cost(add_on, adults, children, stay.nights),
            })
            .collect();
        let add_on_total: f64 = charges.iter().map(|charge| charge.amount).sum();

        StayQuote {
            room_id: room.id.clone(),
            nights: stay.nights,
            grand_total: stay.total + add_on_total,
            stay_total: stay.total,
            breakdown: stay.breakdown,
            add_ons: charges,
            add_on_total,
        }
    }
}
