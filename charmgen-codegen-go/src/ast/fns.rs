//! Go function and method builder.

use charmgen_codegen::builder::CodeBuilder;

/// A method receiver, e.g. `(i MySQLIntegration)`.
#[derive(Debug, Clone)]
pub struct Receiver {
    pub name: String,
    pub ty: String,
}

impl Receiver {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Go functions and methods.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    receiver: Option<Receiver>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            receiver: None,
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn signature(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("({} {}) ", r.name, r.ty))
            .unwrap_or_default();
        let returns = self
            .return_type
            .as_ref()
            .map(|ty| format!(" {}", ty))
            .unwrap_or_default();
        format!("func {}{}(){} {{", receiver, self.name, returns)
    }

    /// Render the function to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = match &self.doc {
            Some(doc) => builder.comment(doc),
            None => builder,
        };

        builder.block(&self.signature(), "}", |b| {
            b.each(&self.body, |b, line| b.line(line))
        })
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::go()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method() {
        let code = Fn::new("IsOptional")
            .receiver(Receiver::new("i", "MySQLIntegration"))
            .returns("bool")
            .body_line("return true")
            .build();

        assert_eq!(
            code,
            "func (i MySQLIntegration) IsOptional() bool {\n\treturn true\n}\n"
        );
    }

    #[test]
    fn test_function_with_doc() {
        let code = Fn::new("run")
            .doc("run does nothing.")
            .body_line("return")
            .build();

        assert_eq!(code, "// run does nothing.\nfunc run() {\n\treturn\n}\n");
    }
}
