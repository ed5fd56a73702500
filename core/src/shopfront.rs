//! The shopfront orchestrator, owner of all simulation state.
//!
//! RUN SEQUENCE (fixed, documented, never reordered):
//!   1. Clear both customer maps (when fresh_maps_per_day is set).
//!   2. Generate the line customers, then the wait-list customers.
//!   3. Register line customers in the store map.
//!   4. Register wait-list customers in the wait-list map and the
//!      store map.
//!   5. Count distinct store identities and record the day's metrics.
//!
//! RULES:
//!   - All randomness flows through the RngBank.
//!   - Registration goes through the ledger functions, never raw
//!     map access.
//!   - Metrics are written once per run, keyed on the current day.

use crate::{
    config::ShopConfig,
    customer::{Customer, CustomerMap},
    error::SimResult,
    generator::CustomerGenerator,
    ledger::{is_customer_registered, register_customer, register_wait_list_customer},
    metrics::{update_daily_metrics, DailyMetrics, DailyMetricsMap},
    rng::RngBank,
    types::{Day, RunId},
};
use serde::Serialize;
use uuid::Uuid;

/// End-of-run report for one simulated day.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub day: Day,
    pub line_customers: u64,
    pub wait_list_customers: u64,
    /// Arrivals whose identity was already in the store map.
    pub repeat_visitors: u64,
    pub total_customers_in_store: u64,
    pub income: f64,
}

pub struct Shopfront {
    pub run_id: RunId,
    config:     ShopConfig,
    generator:  CustomerGenerator,
    store:      CustomerMap,
    wait_list:  CustomerMap,
    metrics:    DailyMetricsMap,
    day:        Day,
}

impl Shopfront {
    /// Build a fully wired shopfront from config and a master seed.
    pub fn build(config: ShopConfig, seed: u64) -> Self {
        let rng_bank = RngBank::new(seed);
        let generator = CustomerGenerator::new(&rng_bank, config.region);
        Self {
            run_id:    format!("run-{}", Uuid::new_v4()),
            config,
            generator,
            store:     CustomerMap::new(),
            wait_list: CustomerMap::new(),
            metrics:   DailyMetricsMap::new(),
            day:       0,
        }
    }

    /// Shopfront over the test config. Used by unit and scenario tests.
    pub fn build_test(seed: u64) -> Self {
        Self::build(ShopConfig::default_test(), seed)
    }

    /// Simulate one day: generate both intake pools and push them
    /// through registration, recording metrics for the current day.
    pub fn run_day(&mut self, line_count: usize, wait_list_count: usize) -> RunSummary {
        let line = self.generator.create_customers(line_count);
        let wait_list = self.generator.create_customers(wait_list_count);
        self.run_day_with(line, wait_list)
    }

    /// The same pipeline over caller-supplied customers. Lets tests and
    /// replay tooling feed fixed populations through registration.
    pub fn run_day_with(&mut self, line: Vec<Customer>, wait_list: Vec<Customer>) -> RunSummary {
        if self.config.fresh_maps_per_day {
            self.store.clear();
            self.wait_list.clear();
            log::debug!("day={} maps cleared for a fresh run", self.day);
        }

        let mut repeat_visitors = 0u64;

        for customer in &line {
            if is_customer_registered(customer, &self.store) {
                repeat_visitors += 1;
            }
            register_customer(customer, &mut self.store);
        }

        for customer in &wait_list {
            register_wait_list_customer(customer, &mut self.wait_list);
            // Wait-list arrivals join the same store population; a
            // repeated identity collapses instead of double-counting.
            if is_customer_registered(customer, &self.store) {
                repeat_visitors += 1;
            }
            register_customer(customer, &mut self.store);
        }

        let metrics = DailyMetrics {
            total_customers_in_store: self.store.len() as u64,
            ..DailyMetrics::default()
        };
        update_daily_metrics(self.day, metrics.clone(), &mut self.metrics);

        let summary = RunSummary {
            day: self.day,
            line_customers: line.len() as u64,
            wait_list_customers: wait_list.len() as u64,
            repeat_visitors,
            total_customers_in_store: metrics.total_customers_in_store,
            income: metrics.income,
        };
        log::info!(
            "day={} line={} wait_list={} repeats={} in_store={}",
            summary.day,
            summary.line_customers,
            summary.wait_list_customers,
            summary.repeat_visitors,
            summary.total_customers_in_store
        );
        summary
    }

    /// Advance to the next day. Returns the new day index.
    pub fn advance_day(&mut self) -> Day {
        self.day += 1;
        self.day
    }

    pub fn current_day(&self) -> Day {
        self.day
    }

    /// Distinct identities currently registered in the store.
    pub fn customers_in_store(&self) -> usize {
        self.store.len()
    }

    /// Distinct identities currently on the wait list.
    pub fn wait_list_size(&self) -> usize {
        self.wait_list.len()
    }

    pub fn metrics(&self) -> &DailyMetricsMap {
        &self.metrics
    }

    pub fn shop_name(&self) -> &str {
        &self.config.shop_name
    }

    /// Pretty-printed JSON of the per-day metrics.
    /// Used by shop-runner's machine-readable output mode.
    pub fn metrics_json(&self) -> SimResult<String> {
        let report = MetricsReport {
            run_id:    &self.run_id,
            shop_name: &self.config.shop_name,
            days:      &self.metrics,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

/// Wire shape for metrics_json.
#[derive(Serialize)]
struct MetricsReport<'a> {
    run_id:    &'a str,
    shop_name: &'a str,
    days:      &'a DailyMetricsMap,
}
