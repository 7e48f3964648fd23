//! Network throughput computation from consecutive counter snapshots.
//!
//! [`NetRateState`] holds the previous [`NetSample`] and its timestamp and
//! turns cumulative byte counters into per-interface send/receive rates.
//! Elapsed time is measured wall-clock (`Instant`) rather than trusting the
//! loop's configured interval, so scheduling jitter does not skew the rates.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::model::NetSample;

/// Compute a u64 counter delta, returning `None` on regression (counter
/// reset). A reset must read as "no data", not as a negative rate.
pub fn du64(curr: u64, prev: u64) -> Option<u64> {
    curr.checked_sub(prev)
}

/// Send/receive throughput for one interface, bytes per second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinkRates {
    pub send_bps: f64,
    pub recv_bps: f64,
}

/// Rate tracking state for the network widgets.
#[derive(Debug, Default)]
pub struct NetRateState {
    prev_sample: Option<NetSample>,
    prev_at: Option<Instant>,
}

impl NetRateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the current sample in and returns per-interface rates.
    ///
    /// The first call yields zero rates for every interface, as does a call
    /// with a non-positive elapsed time; the latter leaves the baseline
    /// untouched so the next call still measures a real interval. Interfaces
    /// absent from the previous sample get zero until they have two data
    /// points.
    pub fn update(&mut self, sample: &NetSample, now: Instant) -> BTreeMap<String, LinkRates> {
        if let (Some(prev), Some(prev_at)) = (&self.prev_sample, self.prev_at) {
            let elapsed = now.saturating_duration_since(prev_at).as_secs_f64();
            if elapsed <= 0.0 {
                return Self::zero_rates(sample);
            }
            let rates = Self::compute(prev, sample, elapsed);
            self.prev_sample = Some(sample.clone());
            self.prev_at = Some(now);
            return rates;
        }

        self.prev_sample = Some(sample.clone());
        self.prev_at = Some(now);
        Self::zero_rates(sample)
    }

    fn zero_rates(sample: &NetSample) -> BTreeMap<String, LinkRates> {
        sample
            .interfaces
            .keys()
            .map(|name| (name.clone(), LinkRates::default()))
            .collect()
    }

    fn compute(prev: &NetSample, curr: &NetSample, elapsed: f64) -> BTreeMap<String, LinkRates> {
        curr.interfaces
            .iter()
            .map(|(name, stat)| {
                let rates = match prev.interfaces.get(name) {
                    Some(p) => LinkRates {
                        send_bps: du64(stat.bytes_sent, p.bytes_sent)
                            .map_or(0.0, |d| d as f64 / elapsed),
                        recv_bps: du64(stat.bytes_recv, p.bytes_recv)
                            .map_or(0.0, |d| d as f64 / elapsed),
                    },
                    None => LinkRates::default(),
                };
                (name.clone(), rates)
            })
            .collect()
    }
}
