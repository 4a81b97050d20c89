/// Economy mechanics: generator output and purchase pricing.
///
/// Upgrade cost:    cost_next = cost_base × growth^owned
/// Production rate: production = (production_base × owned) × multiplier

/// Unitless yield (conventionally per tick) of `owned` generators.
#[inline]
pub fn production_rate(base_productivity: f64, owned: u32, multiplier: f64) -> f64 {
    (base_productivity * f64::from(owned)) * multiplier
}

/// Price of the next unit after `owned` have been bought, to the cent.
///
/// Scales by 100, rounds half away from zero, scales back.
#[inline]
pub fn next_cost(base_cost: f64, growth_rate: f64, owned: u32) -> f64 {
    (base_cost * (growth_rate.powf(f64::from(owned)) * 100.0)).round() / 100.0
}

/// A repeatable purchase priced on an exponential curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostCurve {
    pub base_cost: f64,
    pub growth_rate: f64, // g > 1
}
impl Default for CostCurve {
    fn default() -> Self {
        Self { base_cost: 4.0, growth_rate: 1.07 }
    }
}
impl CostCurve {
    #[inline]
    pub fn cost_at(&self, owned: u32) -> f64 {
        next_cost(self.base_cost, self.growth_rate, owned)
    }

    /// Total price of buying `count` more units starting from `owned`.
    pub fn bulk_cost(&self, owned: u32, count: u32) -> f64 {
        (owned..owned.saturating_add(count)).map(|n| self.cost_at(n)).sum()
    }
}

/// A producer type: base yield per unit and the multiplier in effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Generator {
    pub base_productivity: f64,
    pub multiplier: f64,
}
impl Default for Generator {
    fn default() -> Self {
        Self { base_productivity: 1.67, multiplier: 1.0 }
    }
}
impl Generator {
    #[inline]
    pub fn rate(&self, owned: u32) -> f64 {
        production_rate(self.base_productivity, owned, self.multiplier)
    }
}
