use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pagination::DEFAULT_PAGE_SIZE;

/// Настройки сетки товаров. Любое поле можно опустить в JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Товаров на странице
    pub page_size: usize,
    /// Колонок в сетке
    pub columns: usize,
    /// Отступ от окна просмотра, в пределах которого картинка начинает грузиться
    pub root_margin_px: u32,
    /// Высота заглушки и картинки
    pub placeholder_height_px: u32,
    /// Искусственная задержка перед выдачей страницы, 0 — без задержки
    pub fetch_delay_ms: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            columns: 5,
            root_margin_px: 200,
            placeholder_height_px: 300,
            fetch_delay_ms: 0,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("page_size must be greater than zero")]
    ZeroPageSize,
    #[error("columns must be greater than zero")]
    ZeroColumns,
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GridConfig::default();
        assert_eq!(cfg.page_size, 15);
        assert_eq!(cfg.columns, 5);
        assert_eq!(cfg.root_margin_px, 200);
        assert_eq!(cfg.placeholder_height_px, 300);
        assert_eq!(cfg.fetch_delay_ms, 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"fetch_delay_ms": 500}"#).unwrap();
        assert_eq!(cfg.fetch_delay_ms, 500);
        assert_eq!(cfg.page_size, 15);
    }

    #[test]
    fn test_validate() {
        let cfg = GridConfig {
            page_size: 0,
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroPageSize));

        let cfg = GridConfig {
            columns: 0,
            ..GridConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroColumns));
    }
}
