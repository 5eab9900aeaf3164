use serde::{Deserialize, Serialize};

/// 上下文层级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ContextLevel {
    /// 系统
    System = 10,
    /// 用户
    User = 30,
    /// 课程类别
    CourseCategory = 40,
    /// 课程
    Course = 50,
    /// 活动模块
    Module = 70,
    /// 版块
    Block = 80,
}

impl ContextLevel {
    /// 获取层级代码
    pub fn code(self) -> u16 {
        self as u16
    }

    /// 获取显示名称
    pub fn name(self) -> &'static str {
        match self {
            ContextLevel::System => "System",
            ContextLevel::User => "User",
            ContextLevel::CourseCategory => "Category",
            ContextLevel::Course => "Course",
            ContextLevel::Module => "Activity module",
            ContextLevel::Block => "Block",
        }
    }

    /// 从代码解析层级
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            10 => Some(ContextLevel::System),
            30 => Some(ContextLevel::User),
            40 => Some(ContextLevel::CourseCategory),
            50 => Some(ContextLevel::Course),
            70 => Some(ContextLevel::Module),
            80 => Some(ContextLevel::Block),
            _ => None,
        }
    }
}

impl TryFrom<u16> for ContextLevel {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("未知的上下文层级: {}", code))
    }
}

impl From<ContextLevel> for u16 {
    fn from(level: ContextLevel) -> Self {
        level.code()
    }
}

impl std::fmt::Display for ContextLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 组织上下文（课程、模块等），分类按上下文划分
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionContext {
    pub id: u64,
    pub name: String,
    pub level: ContextLevel,
}

impl QuestionContext {
    pub fn new(id: u64, name: impl Into<String>, level: ContextLevel) -> Self {
        Self {
            id,
            name: name.into(),
            level,
        }
    }

    /// 上下文的显示名称，例如 "Course: Algebra I"
    pub fn display_name(&self) -> String {
        match self.level {
            ContextLevel::System => self.level.name().to_string(),
            level => format!("{}: {}", level.name(), self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_codes_round_trip() {
        for level in [
            ContextLevel::System,
            ContextLevel::User,
            ContextLevel::CourseCategory,
            ContextLevel::Course,
            ContextLevel::Module,
            ContextLevel::Block,
        ] {
            assert_eq!(ContextLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(ContextLevel::from_code(20), None);
    }

    #[test]
    fn display_name_includes_level() {
        let course = QuestionContext::new(5, "Algebra I", ContextLevel::Course);
        assert_eq!(course.display_name(), "Course: Algebra I");

        let system = QuestionContext::new(1, "ignored", ContextLevel::System);
        assert_eq!(system.display_name(), "System");
    }

    #[test]
    fn level_deserializes_from_number() {
        let ctx: QuestionContext =
            serde_json::from_str(r#"{"id": 3, "name": "Quiz", "level": 70}"#).unwrap();
        assert_eq!(ctx.level, ContextLevel::Module);

        let bad = serde_json::from_str::<QuestionContext>(r#"{"id": 3, "name": "x", "level": 99}"#);
        assert!(bad.is_err());
    }
}
