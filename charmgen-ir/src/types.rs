//! Core type definitions.

use serde::Serialize;

/// Semantic base type of a configuration option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Boolean,
    /// Double-precision floating point.
    Float,
    Integer,
    String,
}

impl BaseType {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Boolean => "boolean",
            BaseType::Float => "float",
            BaseType::Integer => "integer",
            BaseType::String => "string",
        }
    }
}

/// Target type of a generated binding: a base type plus a nullability bit.
///
/// A nullable descriptor means the option has no default, so the binding must
/// be able to tell "not supplied" apart from the zero value of the base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor {
    pub base: BaseType,
    pub nullable: bool,
}

impl TypeDescriptor {
    /// A descriptor that always holds a value.
    pub fn required(base: BaseType) -> Self {
        Self {
            base,
            nullable: false,
        }
    }

    /// A descriptor that may be absent.
    pub fn nullable(base: BaseType) -> Self {
        Self {
            base,
            nullable: true,
        }
    }
}

/// Closed catalog of integrations the generator knows how to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum IntegrationKind {
    MongoDb,
    MySql,
    PostgreSql,
    Redis,
    S3,
    Saml,
}

impl IntegrationKind {
    /// All known integrations, in catalog-key order.
    pub const ALL: [IntegrationKind; 6] = [
        IntegrationKind::MongoDb,
        IntegrationKind::MySql,
        IntegrationKind::PostgreSql,
        IntegrationKind::Redis,
        IntegrationKind::S3,
        IntegrationKind::Saml,
    ];

    /// Look up an integration by its `requires` key in charmcraft.yaml.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "mongodb" => Some(IntegrationKind::MongoDb),
            "mysql" => Some(IntegrationKind::MySql),
            "postgresql" => Some(IntegrationKind::PostgreSql),
            "redis" => Some(IntegrationKind::Redis),
            "s3" => Some(IntegrationKind::S3),
            "saml" => Some(IntegrationKind::Saml),
            _ => None,
        }
    }

    /// The catalog key, as written in charmcraft.yaml.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationKind::MongoDb => "mongodb",
            IntegrationKind::MySql => "mysql",
            IntegrationKind::PostgreSql => "postgresql",
            IntegrationKind::Redis => "redis",
            IntegrationKind::S3 => "s3",
            IntegrationKind::Saml => "saml",
        }
    }

    /// Canonical display name, used to build source identifiers.
    pub fn display_name(&self) -> &'static str {
        match self {
            IntegrationKind::MongoDb => "MongoDB",
            IntegrationKind::MySql => "MySQL",
            IntegrationKind::PostgreSql => "PostgreSQL",
            IntegrationKind::Redis => "Redis",
            IntegrationKind::S3 => "S3",
            IntegrationKind::Saml => "SAML",
        }
    }

    /// Returns true for relational, document and key-value stores.
    pub fn is_database(&self) -> bool {
        self.database_prefix().is_some()
    }

    /// Environment variable prefix for database-like integrations.
    pub fn database_prefix(&self) -> Option<&'static str> {
        match self {
            IntegrationKind::MongoDb => Some("APP_MONGODB_"),
            IntegrationKind::MySql => Some("APP_MYSQL_"),
            IntegrationKind::PostgreSql => Some("APP_POSTGRESQL_"),
            IntegrationKind::Redis => Some("APP_REDIS_"),
            IntegrationKind::S3 | IntegrationKind::Saml => None,
        }
    }
}
