use super::value_objects::{CalendarDate, DateInterval, QueryKey, StrategyId, TimeScale};

/// Глубина интервала по умолчанию
pub const DEFAULT_LOOKBACK_YEARS: u32 = 5;
/// Максимум, принимаемый из конфигурации
pub const MAX_LOOKBACK_YEARS: u32 = 100;

/// Параметры графика, выбранные пользователем. Меняются только через
/// сеттеры ниже; ключ запроса всегда вычисляется, не хранится.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphParams {
    strategy_id: StrategyId,
    scale: TimeScale,
    interval: DateInterval,
}

impl GraphParams {
    pub fn new(strategy_id: StrategyId, scale: TimeScale, interval: DateInterval) -> Self {
        Self { strategy_id, scale, interval }
    }

    /// Масштаб день на интервале `[today - lookback_years, today]`
    pub fn starting_at(strategy_id: StrategyId, today: CalendarDate, lookback_years: u32) -> Self {
        Self::new(strategy_id, TimeScale::default(), DateInterval::ending_at(today, lookback_years))
    }

    pub fn strategy_id(&self) -> &StrategyId {
        &self.strategy_id
    }

    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    pub fn interval(&self) -> DateInterval {
        self.interval
    }

    pub fn set_scale(&mut self, scale: TimeScale) {
        self.scale = scale;
    }

    pub fn select_hour(&mut self) {
        self.set_scale(TimeScale::Hour);
    }

    pub fn select_day(&mut self) {
        self.set_scale(TimeScale::Day);
    }

    pub fn select_week(&mut self) {
        self.set_scale(TimeScale::Week);
    }

    pub fn select_month(&mut self) {
        self.set_scale(TimeScale::Month);
    }

    /// Accepts whatever the picker emits; `from <= to` is not enforced.
    pub fn set_interval(&mut self, interval: DateInterval) {
        self.interval = interval;
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey::new(self.strategy_id.clone(), self.scale, &self.interval)
    }
}
