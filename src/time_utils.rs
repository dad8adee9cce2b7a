use crate::domain::graph::CalendarDate;

/// Сегодняшняя дата в локальной зоне браузера
pub fn today() -> CalendarDate {
    chrono::Local::now().date_naive().into()
}

#[cfg(test)]
mod tests {
    use super::today;

    #[test]
    fn today_is_valid() {
        assert!(today().is_valid());
        assert_eq!(today().to_string().len(), 10);
    }
}
