use crate::domain::graph::{CalendarDate, DateInterval, GraphParams, TimeScale, format_date};
use strum::IntoEnumIterator;

/// Одна ссылка переключателя масштаба
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleLink {
    pub scale: TimeScale,
    pub label: &'static str,
    pub active: bool,
}

/// Ссылки в порядке час/день/неделя/месяц; активна ровно текущая.
pub fn scale_links(params: &GraphParams) -> Vec<ScaleLink> {
    TimeScale::iter()
        .map(|scale| ScaleLink { scale, label: scale.label(), active: params.scale() == scale })
        .collect()
}

/// Обработчик клика по ссылке масштаба
pub fn select_scale(params: &mut GraphParams, scale: TimeScale) {
    match scale {
        TimeScale::Hour => params.select_hour(),
        TimeScale::Day => params.select_day(),
        TimeScale::Week => params.select_week(),
        TimeScale::Month => params.select_month(),
    }
}

/// Какой конец интервала редактирует поле даты
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd {
    From,
    To,
}

/// `value` attribute of a date input; invalid dates show as an empty input.
pub fn input_value(params: &GraphParams, end: RangeEnd) -> String {
    let interval = params.interval();
    match end {
        RangeEnd::From => format_date(interval.from),
        RangeEnd::To => format_date(interval.to),
    }
}

/// Применяет изменение поля даты. Нераспознанный текст превращается в
/// невалидную дату, а не отбрасывается.
pub fn change_range_end(params: &mut GraphParams, end: RangeEnd, raw: &str) {
    let current = params.interval();
    let date = CalendarDate::parse(raw);
    let interval = match end {
        RangeEnd::From => DateInterval::new(date, current.to),
        RangeEnd::To => DateInterval::new(current.from, date),
    };
    params.set_interval(interval);
}
