use serde::Deserialize;

/// Render settings.
///
/// Every field has a default, so settings can be deserialized from a partial
/// document:
///
/// ```
/// use prism_sql::{ParamType, Settings};
///
/// let settings: Settings = serde_json::from_str(r#"{ "param_type": "inlined" }"#).unwrap();
/// assert_eq!(settings.param_type, ParamType::Inlined);
/// assert!(!settings.render_formatted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Put each clause on its own line.
    pub render_formatted: bool,

    /// One level of indentation when `render_formatted` is set.
    pub indentation: String,

    pub render_quoted_names: RenderQuotedNames,

    pub render_name_case: RenderNameCase,

    pub param_type: ParamType,

    /// What to do with a DELETE that has no WHERE clause.
    pub execute_delete_without_where: ExecuteWithoutWhere,

    /// What to do with an UPDATE that has no WHERE clause.
    pub execute_update_without_where: ExecuteWithoutWhere,
}

/// Which identifiers are quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderQuotedNames {
    /// Quote every identifier.
    Always,

    /// Quote identifiers unless they were created unquoted.
    #[default]
    ExplicitDefaultQuoted,

    /// Quote only identifiers that were created quoted.
    ExplicitDefaultUnquoted,

    /// Never quote.
    Never,
}

/// Case transformation applied to identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderNameCase {
    #[default]
    AsIs,
    Lower,
    Upper,
    LowerIfUnquoted,
    UpperIfUnquoted,
}

/// How bind values appear in the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// Positional placeholders in the dialect's style, e.g. `$1` or `?`.
    #[default]
    Indexed,

    /// Named placeholders, e.g. `:name`. Unnamed values are numbered.
    Named,

    /// Values are rendered as literals and no parameters are collected.
    Inlined,
}

/// Policy for DELETE and UPDATE statements without a WHERE clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteWithoutWhere {
    #[default]
    Ignore,
    LogDebug,
    LogInfo,
    LogWarn,
    Throw,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            render_formatted: false,
            indentation: "  ".to_string(),
            render_quoted_names: RenderQuotedNames::default(),
            render_name_case: RenderNameCase::default(),
            param_type: ParamType::default(),
            execute_delete_without_where: ExecuteWithoutWhere::default(),
            execute_update_without_where: ExecuteWithoutWhere::default(),
        }
    }
}

impl Settings {
    pub fn inlined() -> Settings {
        Settings {
            param_type: ParamType::Inlined,
            ..Settings::default()
        }
    }

    pub fn formatted() -> Settings {
        Settings {
            render_formatted: true,
            ..Settings::default()
        }
    }
}
