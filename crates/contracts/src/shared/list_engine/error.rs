use thiserror::Error;

/// Ошибки движка списков. До пользователя не доходят: контроллер
/// ограничивает номер страницы заранее.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("page {requested} is out of range 1..={total_pages}")]
    PageOutOfRange { requested: usize, total_pages: usize },

    #[error("page size must be greater than zero")]
    InvalidPageSize,
}
