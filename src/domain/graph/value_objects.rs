use chrono::{Datelike, NaiveDate};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// ⏰ Масштаб агрегации, запрашиваемый у API
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl TimeScale {
    /// Значение параметра `scale`
    pub fn as_param(&self) -> &str {
        self.as_ref()
    }

    /// Подпись ссылки переключателя
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hour => "Час",
            Self::Day => "День",
            Self::Week => "Неделя",
            Self::Month => "Месяц",
        }
    }
}

/// Календарная дата, которая может быть невалидной (например, из кривого ввода).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct CalendarDate(Option<NaiveDate>);

impl CalendarDate {
    pub fn invalid() -> Self {
        Self(None)
    }

    /// Out-of-range components (month 13, 30 February, ...) give an invalid date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day))
    }

    /// Parses `YYYY-MM-DD` as emitted by `<input type="date">`; anything else is invalid.
    pub fn parse(input: &str) -> Self {
        Self(NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok())
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_naive(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Тот же день `years` лет назад. 29 февраля в невисокосном году
    /// переходит на 1 марта.
    pub fn years_before(&self, years: u32) -> Self {
        let Some(date) = self.0 else {
            return Self::invalid();
        };
        let Some(year) = i32::try_from(years).ok().and_then(|years| date.year().checked_sub(years))
        else {
            return Self::invalid();
        };
        Self(
            date.with_year(year)
                .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1)),
        )
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(Some(date))
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_date(*self))
    }
}

/// `YYYY-MM-DD` with zero-padded month and day, or `""` for an invalid date.
pub fn format_date(date: CalendarDate) -> String {
    match date.as_naive() {
        Some(d) => format!("{}-{:02}-{:02}", d.year(), d.month(), d.day()),
        None => String::new(),
    }
}

/// Интервал дат (включительно) для фильтра запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    pub from: CalendarDate,
    pub to: CalendarDate,
}

impl DateInterval {
    pub fn new(from: CalendarDate, to: CalendarDate) -> Self {
        Self { from, to }
    }

    /// `[today - years, today]`
    pub fn ending_at(today: CalendarDate, years: u32) -> Self {
        Self { from: today.years_before(years), to: today }
    }

    pub fn formatted(&self) -> (String, String) {
        (format_date(self.from), format_date(self.to))
    }
}

/// Идентификатор стратегии
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrategyId(String);

impl StrategyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Default for StrategyId {
    fn default() -> Self {
        Self("1".to_string())
    }
}

impl From<&str> for StrategyId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// 🔑 Ключ запроса; равные ключи делят одну запись кэша.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}/{}/{}..{}", strategy_id, scale, from, to)]
pub struct QueryKey {
    pub strategy_id: StrategyId,
    pub scale: TimeScale,
    pub from: String,
    pub to: String,
}

impl QueryKey {
    pub fn new(strategy_id: StrategyId, scale: TimeScale, interval: &DateInterval) -> Self {
        let (from, to) = interval.formatted();
        Self { strategy_id, scale, from, to }
    }
}
