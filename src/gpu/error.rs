use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    CanvasNotFound(String),
    NotACanvas(String),
    ContextUnavailable(String),
    ProgramUnavailable(&'static str),
    BufferUnavailable(&'static str),
    MissingAttribute(&'static str),
    MissingVertexData(&'static str),
    InvalidComponents { attribute: &'static str, components: i32 },
    RaggedVertexData { attribute: &'static str, len: usize, components: i32 },
    VertexCountMismatch { positions: usize, colors: usize },
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasNotFound(id) => write!(f, "no element with id `{id}`"),
            Self::NotACanvas(id) => write!(f, "element `{id}` is not a canvas"),
            Self::ContextUnavailable(id) => write!(
                f,
                "unable to initialize WebGL2 on `{id}`; the browser may not support it"
            ),
            Self::ProgramUnavailable(scene) => {
                write!(f, "{scene}: shader program could not be built")
            }
            Self::BufferUnavailable(what) => write!(f, "could not allocate {what} buffer"),
            Self::MissingAttribute(name) => {
                write!(f, "attribute `{name}` is not active in the program")
            }
            Self::MissingVertexData(what) => write!(f, "no {what} data supplied"),
            Self::InvalidComponents { attribute, components } => write!(
                f,
                "{attribute}: {components} components per vertex, expected 1..=4"
            ),
            Self::RaggedVertexData { attribute, len, components } => write!(
                f,
                "{attribute}: {len} values is not a multiple of {components} components"
            ),
            Self::VertexCountMismatch { positions, colors } => write!(
                f,
                "{positions} position vertices but {colors} color vertices"
            ),
        }
    }
}

impl std::error::Error for GlError {}

pub type Result<T> = core::result::Result<T, GlError>;
