//! Go struct builder.

use charmgen_codegen::builder::CodeBuilder;

/// A field in a Go struct.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name, `None` for embedded fields.
    pub name: Option<String>,
    pub ty: String,
    pub tags: Vec<(String, String)>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            tags: Vec::new(),
        }
    }

    /// An embedded (anonymous) field.
    pub fn embedded(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
            tags: Vec::new(),
        }
    }

    /// Add a struct tag entry, e.g. `env:"APP_PORT"`.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    /// `env:"<name>"`
    pub fn env(self, name: impl Into<String>) -> Self {
        self.tag("env", name)
    }

    pub fn is_embedded(&self) -> bool {
        self.name.is_none()
    }

    fn render_tag(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        let entries: Vec<String> = self
            .tags
            .iter()
            .map(|(key, value)| format!("{}:\"{}\"", key, value))
            .collect();
        Some(format!("`{}`", entries.join(" ")))
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(3);
        if let Some(name) = &self.name {
            cells.push(name.clone());
        }
        cells.push(self.ty.clone());
        cells.extend(self.render_tag());
        cells
    }
}

/// Builder for Go struct type declarations.
///
/// Named fields are rendered first with their columns aligned. Embedded
/// fields follow after a blank line.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the struct to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.fields.is_empty() {
            return builder.line(&format!("type {} struct{{}}", self.name));
        }

        let (embedded, named): (Vec<&Field>, Vec<&Field>) =
            self.fields.iter().partition(|f| f.is_embedded());
        let named: Vec<Vec<String>> = named.iter().map(|f| f.cells()).collect();
        let embedded: Vec<Vec<String>> = embedded.iter().map(|f| f.cells()).collect();

        builder.block(&format!("type {} struct {{", self.name), "}", |b| {
            b.aligned(&named)
                .when(!named.is_empty() && !embedded.is_empty(), |b| b.blank())
                .aligned(&embedded)
        })
    }

    /// Build the struct as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::go()).build()
    }
}
