//! 分类排序规则
//!
//! 解析形如 `"parent, sortorder, name"` 的排序字符串

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::SourceError;
use crate::models::Category;

/// 可排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Parent,
    SortOrder,
    Name,
    QuestionCount,
}

impl SortField {
    fn compare(self, a: &Category, b: &Category) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Parent => a.parent.cmp(&b.parent),
            SortField::SortOrder => a.sort_order.cmp(&b.sort_order),
            SortField::Name => a.name.cmp(&b.name),
            SortField::QuestionCount => a.question_count.cmp(&b.question_count),
        }
    }
}

/// 单个排序键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub descending: bool,
}

/// 排序规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// 分类列表的默认排序
    pub const CATEGORY_DEFAULT: &'static str = "parent, sortorder, name";

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn compare(&self, a: &Category, b: &Category) -> Ordering {
        for key in &self.keys {
            let ord = key.field.compare(a, b);
            let ord = if key.descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// 稳定排序
    pub fn sort(&self, categories: &mut [Category]) {
        categories.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            keys: vec![
                SortKey {
                    field: SortField::Parent,
                    descending: false,
                },
                SortKey {
                    field: SortField::SortOrder,
                    descending: false,
                },
                SortKey {
                    field: SortField::Name,
                    descending: false,
                },
            ],
        }
    }
}

impl FromStr for SortSpec {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut keys = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let mut words = part.split_whitespace();
            let name = words.next().unwrap_or_default();
            let field = match name.to_ascii_lowercase().as_str() {
                "id" => SortField::Id,
                "parent" => SortField::Parent,
                "sortorder" => SortField::SortOrder,
                "name" => SortField::Name,
                "questioncount" => SortField::QuestionCount,
                _ => {
                    return Err(SourceError::UnknownSortKey {
                        key: part.to_string(),
                    })
                }
            };
            let descending = match words.next().map(str::to_ascii_uppercase).as_deref() {
                None | Some("ASC") => false,
                Some("DESC") => true,
                Some(_) => {
                    return Err(SourceError::UnknownSortKey {
                        key: part.to_string(),
                    })
                }
            };
            if words.next().is_some() {
                return Err(SourceError::UnknownSortKey {
                    key: part.to_string(),
                });
            }
            keys.push(SortKey { field, descending });
        }

        if keys.is_empty() {
            return Err(SourceError::EmptySortSpec);
        }
        Ok(Self { keys })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_category_string() {
        let parsed: SortSpec = SortSpec::CATEGORY_DEFAULT.parse().unwrap();
        assert_eq!(parsed, SortSpec::default());
    }

    #[test]
    fn parses_direction() {
        let spec: SortSpec = "name DESC, id asc".parse().unwrap();
        assert_eq!(spec.keys().len(), 2);
        assert!(spec.keys()[0].descending);
        assert!(!spec.keys()[1].descending);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            "parent, colour".parse::<SortSpec>(),
            Err(SourceError::UnknownSortKey { .. })
        ));
        assert!(matches!("  ".parse::<SortSpec>(), Err(SourceError::EmptySortSpec)));
        assert!("name DESC extra".parse::<SortSpec>().is_err());
    }

    #[test]
    fn sorts_by_parent_then_sortorder_then_name() {
        let mut cats = vec![
            Category::new(1, "b", 1).with_parent(0).with_sort_order(5),
            Category::new(2, "z", 1).with_parent(1).with_sort_order(0),
            Category::new(3, "a", 1).with_parent(0).with_sort_order(5),
            Category::new(4, "c", 1).with_parent(0).with_sort_order(1),
        ];
        SortSpec::default().sort(&mut cats);
        let ids: Vec<u64> = cats.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 3, 1, 2]);
    }
}
