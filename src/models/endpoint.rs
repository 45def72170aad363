use oas3::spec::SchemaType;

/// Scalar kind of a request parameter, collapsed from the schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    /// Anything that is not explicitly `string` or `number`
    Other,
}

impl From<SchemaType> for ParamKind {
    fn from(ty: SchemaType) -> Self {
        match ty {
            SchemaType::String => ParamKind::String,
            SchemaType::Number => ParamKind::Number,
            _ => ParamKind::Other,
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamKind::String => write!(f, "string"),
            ParamKind::Number => write!(f, "number"),
            ParamKind::Other => write!(f, "other"),
        }
    }
}

/// A single query parameter or top-level body property
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub example: Option<serde_json::Value>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            example: None,
        }
    }

    pub fn with_example(mut self, example: serde_json::Value) -> Self {
        self.example = Some(example);
        self
    }
}

/// One HTTP method defined on a path
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// Upper-case HTTP verb (e.g. "GET")
    pub method: String,
    pub queries: Vec<ParamSpec>,
    pub bodies: Vec<ParamSpec>,
}

impl MethodSpec {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            queries: Vec::new(),
            bodies: Vec::new(),
        }
    }

    pub fn has_query(&self) -> bool {
        !self.queries.is_empty()
    }

    pub fn has_body(&self) -> bool {
        !self.bodies.is_empty()
    }
}

/// A path template together with every method defined on it
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSpec {
    /// Name derived from the path template (e.g. `/users/{id}` -> `UsersId`)
    pub display_name: String,
    pub path: String,
    pub methods: Vec<MethodSpec>,
}

impl EndpointSpec {
    /// Step name for one of this endpoint's methods, e.g. `UsersId(GET)`
    pub fn step_name(&self, method: &MethodSpec) -> String {
        format!("{}({})", self.display_name, method.method)
    }
}

/// Role of a path, decided from its literal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Ordinary,
    Login,
    Logout,
}

/// Endpoints partitioned by role, each collection in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedEndpoints {
    pub ordinary: Vec<EndpointSpec>,
    pub login: Vec<EndpointSpec>,
    /// Extracted for completeness; not consumed by the assembler
    pub logout: Vec<EndpointSpec>,
}

impl ExtractedEndpoints {
    pub fn push(&mut self, role: EndpointRole, endpoint: EndpointSpec) {
        match role {
            EndpointRole::Ordinary => self.ordinary.push(endpoint),
            EndpointRole::Login => self.login.push(endpoint),
            EndpointRole::Logout => self.logout.push(endpoint),
        }
    }

    pub fn total(&self) -> usize {
        self.ordinary.len() + self.login.len() + self.logout.len()
    }
}
