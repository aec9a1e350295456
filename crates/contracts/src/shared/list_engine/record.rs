/// Запись списка, однозначно идентифицируемая по `id`
pub trait ListRecord: Clone {
    fn record_id(&self) -> &str;
}

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Поля, по которым идёт поиск подстроки
    fn search_fields(&self) -> Vec<&str>;

    /// Проверяет, соответствует ли объект поисковому запросу (case-insensitive).
    /// Пустой запрос или запрос из одних пробелов совпадает с любой записью.
    fn matches_filter(&self, filter: &str) -> bool {
        normalize_query(filter).map_or(true, |query| matches_query(self, &query))
    }
}

/// Запрос в нижнем регистре; `None` для пустого или пробельного.
/// Пробелы отбрасываются только для проверки на пустоту: `"lamp "` ищется как есть.
pub(crate) fn normalize_query(search: &str) -> Option<String> {
    if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    }
}

/// `query` уже в нижнем регистре
pub(crate) fn matches_query<R: Searchable + ?Sized>(record: &R, query: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

/// Новая коллекция без записи `id`; исходная не меняется
pub fn without_record<R: ListRecord>(collection: &[R], id: &str) -> Vec<R> {
    collection
        .iter()
        .filter(|r| r.record_id() != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: &'static str,
        title: &'static str,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> &str {
            self.id
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.id, self.title]
        }
    }

    #[test]
    fn test_matches_filter_is_case_insensitive() {
        let row = Row { id: "r-1", title: "Smart LED Desk Lamp" };
        assert!(row.matches_filter("led desk"));
        assert!(row.matches_filter("LAMP"));
        assert!(row.matches_filter("R-1"));
        assert!(!row.matches_filter("chair"));
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let row = Row { id: "r-1", title: "Smart LED Desk Lamp" };
        assert!(row.matches_filter("desk "));
        assert!(!row.matches_filter("lamp "));
        assert!(!row.matches_filter(" smart"));
        assert_eq!(normalize_query(" Desk "), Some(" desk ".to_string()));
    }

    #[test]
    fn test_blank_filter_matches_everything() {
        let row = Row { id: "r-1", title: "anything" };
        assert!(row.matches_filter(""));
        assert!(row.matches_filter("   \t"));
    }

    #[test]
    fn test_without_record() {
        let rows = vec![
            Row { id: "a", title: "A" },
            Row { id: "b", title: "B" },
            Row { id: "c", title: "C" },
        ];
        let rest = without_record(&rows, "b");
        assert_eq!(rest.iter().map(|r| r.id).collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(without_record(&rows, "zzz"), rows);
    }
}
