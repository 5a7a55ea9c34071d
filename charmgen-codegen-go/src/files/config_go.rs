use std::path::{Path, PathBuf};

use charmgen_codegen::{builder::CodeBuilder, language::TypeMapper};
use charmgen_core::{GENERATED_HEADER, GeneratedFile};
use charmgen_ir::{ConfigIR, Integration, IntegrationKind};

use crate::{
    GoTypeMapper,
    ast::{Field, Fn, Receiver, Struct},
};

/// Options every Go charm receives from the framework: (field, type, env suffix).
const FRAMEWORK_OPTIONS: [(&str, &str, &str); 5] = [
    ("BaseURL", "string", "BASE_URL"),
    ("Port", "int", "PORT"),
    ("MetricsPort", "*int", "METRICS_PORT"),
    ("MetricsPath", "*string", "METRICS_PATH"),
    ("SecretKey", "*string", "SECRET_KEY"),
];

/// Fields shared by all database integrations, read below the integration prefix.
const DATABASE_FIELDS: [(&str, &str, &str); 12] = [
    ("ConnectString", "string", "DB_CONNECT_STRING"),
    ("Scheme", "string", "DB_SCHEME"),
    ("NetLoc", "string", "DB_NETLOC"),
    ("Path", "string", "DB_PATH"),
    ("Params", "string", "DB_PARAMS"),
    ("Query", "string", "DB_QUERY"),
    ("Fragment", "string", "DB_FRAGMENT"),
    ("Username", "*string", "DB_USERNAME"),
    ("Password", "*string", "DB_PASSWORD"),
    ("Hostname", "*string", "DB_HOSTNAME"),
    ("Port", "*int", "DB_PORT"),
    ("Name", "*string", "DB_NAME"),
];

const S3_FIELDS: [(&str, &str, &str); 12] = [
    ("AccessKey", "string", "ACCESS_KEY"),
    ("SecretKey", "string", "SECRET_KEY"),
    ("Region", "*string", "REGION"),
    ("StorageClass", "*string", "STORAGE_CLASS"),
    ("Bucket", "string", "BUCKET"),
    ("Endpoint", "*string", "ENDPOINT"),
    ("Path", "*string", "PATH"),
    ("ApiVersion", "*string", "API_VERSION"),
    ("UriStyle", "*string", "URI_STYLE"),
    ("AddressingStyle", "*string", "ADDRESSING_STYLE"),
    ("Attributes", "[]string", "ATTRIBUTES"),
    ("TLSCAChain", "[]string", "TLS_CA_CHAIN"),
];

const SAML_FIELDS: [(&str, &str, &str); 4] = [
    ("EntityID", "string", "ENTITY_ID"),
    ("MetadataURL", "*string", "METADATA_URL"),
    ("SingleSignOnRedirectURL", "string", "SINGLE_SIGN_ON_REDIRECT_URL"),
    ("SigningCertificate", "string", "SIGNING_CERTIFICATE"),
];

/// The generated Go config file.
pub struct ConfigGo<'a> {
    ir: &'a ConfigIR,
    output: PathBuf,
}

impl<'a> ConfigGo<'a> {
    /// `output` is resolved against the base directory unless it is absolute.
    pub fn new(ir: &'a ConfigIR, output: impl Into<PathBuf>) -> Self {
        Self {
            ir,
            output: output.into(),
        }
    }

    fn prefixed(&self, suffix: &str) -> String {
        format!("{}{}", self.ir.common_prefix, suffix)
    }

    fn render_preamble(&self, builder: CodeBuilder) -> CodeBuilder {
        builder
            .line(GENERATED_HEADER)
            .blank()
            .line(&format!("package {}", self.ir.package_name))
            .blank()
            .line(&format!("const CommonPrefix = \"{}\"", self.ir.common_prefix))
    }

    fn charm_config(&self) -> Struct {
        Struct::new("CharmConfig")
            .field(Field::new("Options", "ConfigOptions"))
            .field(Field::new("Proxy", "ProxyConfig"))
            .field(Field::new("Integrations", "Integrations"))
    }

    fn config_options(&self) -> Struct {
        Struct::new("ConfigOptions")
            .fields(
                FRAMEWORK_OPTIONS
                    .iter()
                    .map(|(name, ty, suffix)| Field::new(*name, *ty).env(self.prefixed(suffix))),
            )
            .field(Field::embedded("UserConfigOptions"))
    }

    fn user_config_options(&self) -> Struct {
        let mapper = GoTypeMapper;
        Struct::new("UserConfigOptions").fields(self.ir.options.iter().map(|option| {
            Field::new(&option.identifier, mapper.map_type(option.ty)).env(&option.env_var)
        }))
    }

    fn proxy_config(&self) -> Struct {
        Struct::new("ProxyConfig")
            .field(Field::new("HTTPProxy", "*string").env("HTTP_PROXY"))
            .field(Field::new("HTTPSProxy", "*string").env("HTTPS_PROXY"))
            .field(list_field("NoProxy", "NO_PROXY"))
    }

    fn integrations(&self) -> Struct {
        Struct::new("Integrations").fields(self.ir.integrations.values().map(|integration| {
            Field::new(&integration.display_name, struct_name(integration))
        }))
    }

    fn database_integration(&self) -> Struct {
        Struct::new("DatabaseIntegration").fields(
            DATABASE_FIELDS
                .iter()
                .map(|(name, ty, env)| Field::new(*name, *ty).env(*env)),
        )
    }

    fn integration_struct(&self, integration: &Integration) -> Struct {
        let name = struct_name(integration);
        match (&integration.database_prefix, integration.kind) {
            (Some(prefix), _) => Struct::new(name).field(
                Field::embedded("DatabaseIntegration").tag("envPrefix", prefix.as_str()),
            ),
            (None, IntegrationKind::S3) => {
                Struct::new(name).fields(self.service_fields("S3_", &S3_FIELDS))
            }
            (None, IntegrationKind::Saml) => {
                Struct::new(name).fields(self.service_fields("SAML_", &SAML_FIELDS))
            }
            // Database kinds always carry a prefix
            (None, _) => Struct::new(name),
        }
    }

    fn service_fields<'f>(
        &'f self,
        service_prefix: &'f str,
        fields: &'f [(&str, &str, &str)],
    ) -> impl Iterator<Item = Field> + 'f {
        fields.iter().map(move |(name, ty, suffix)| {
            let env = self.prefixed(&format!("{}{}", service_prefix, suffix));
            if *ty == "[]string" {
                list_field(name, env)
            } else {
                Field::new(*name, *ty).env(env)
            }
        })
    }

    fn integration_methods(&self, integration: &Integration) -> [Fn; 2] {
        let receiver = || Receiver::new("i", struct_name(integration));
        let active_check = match integration.kind {
            IntegrationKind::S3 => "i.Bucket != \"\"",
            IntegrationKind::Saml => "i.EntityID != \"\"",
            _ => "i.ConnectString != \"\"",
        };

        [
            Fn::new("IsOptional")
                .doc("IsOptional reports whether the integration is declared optional.")
                .receiver(receiver())
                .returns("bool")
                .body_line(format!("return {}", integration.optional)),
            Fn::new("IsActive")
                .doc("IsActive reports whether the integration data is available.")
                .receiver(receiver())
                .returns("bool")
                .body_line(format!("return {}", active_check)),
        ]
    }

    fn render_integration(&self, builder: CodeBuilder, integration: &Integration) -> CodeBuilder {
        let builder = self.integration_struct(integration).render(builder.blank());
        self.integration_methods(integration)
            .iter()
            .fold(builder, |b, method| method.render(b.blank()))
    }
}

/// Go type name of an integration struct, e.g. "MySQLIntegration".
fn struct_name(integration: &Integration) -> String {
    format!("{}Integration", integration.display_name)
}

/// A comma separated list read into a string slice.
fn list_field(name: &str, env: impl Into<String>) -> Field {
    Field::new(name, "[]string")
        .env(env)
        .tag("envSeparator", ",")
}

impl GeneratedFile for ConfigGo<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.output)
    }

    fn render(&self) -> String {
        let structs = [
            self.charm_config(),
            self.config_options(),
            self.user_config_options(),
            self.proxy_config(),
            self.integrations(),
        ];

        let builder = self.render_preamble(CodeBuilder::go());
        let builder = structs
            .iter()
            .fold(builder, |b, s| s.render(b.blank()))
            .when(self.ir.has_database_integrations, |b| {
                self.database_integration().render(b.blank())
            });

        self.ir
            .integrations
            .values()
            .fold(builder, |b, integration| {
                self.render_integration(b, integration)
            })
            .build()
    }
}
