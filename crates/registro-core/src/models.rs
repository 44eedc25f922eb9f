//! Data models for Registro
//!
//! Defines the core data structures: Document, DocumentDraft, and the
//! closed enumerations used to classify documents.
//!
//! Documents serialize with the camelCase field names used by existing
//! snapshots (`fechaSubida`, `subcategoria`, ...), so a collection written by
//! an earlier client loads unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level classification of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Administrativo,
    Financiero,
    Legal,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [
        Category::Administrativo,
        Category::Financiero,
        Category::Legal,
    ];

    /// Get the display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Administrativo => "Administrativo",
            Category::Financiero => "Financiero",
            Category::Legal => "Legal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("category", s, &Category::ALL))
    }
}

/// File type of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "PDF")]
    Pdf,
    Word,
    Imagen,
}

impl DocumentType {
    /// All document types in display order
    pub const ALL: [DocumentType; 3] = [DocumentType::Pdf, DocumentType::Word, DocumentType::Imagen];

    /// Get the display name
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "PDF",
            DocumentType::Word => "Word",
            DocumentType::Imagen => "Imagen",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("document type", s, &DocumentType::ALL))
    }
}

/// Lifecycle state of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentState {
    #[default]
    Activo,
    Inactivo,
}

impl DocumentState {
    pub const ALL: [DocumentState; 2] = [DocumentState::Activo, DocumentState::Inactivo];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentState::Activo => "Activo",
            DocumentState::Inactivo => "Inactivo",
        }
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DocumentState {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentState::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("document state", s, &DocumentState::ALL))
    }
}

/// Error returned when parsing one of the closed enumerations fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'. Expected one of: {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseEnumError {
    fn new<T: fmt::Display>(kind: &'static str, value: &str, options: &[T]) -> Self {
        let expected = options
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// A registered document (metadata only)
///
/// Documents are built exclusively by [`crate::DocumentStore`]; callers
/// describe the values they want with a [`DocumentDraft`]. Fields are
/// readable everywhere, but other crates cannot build one from a literal:
///
/// ```compile_fail
/// use registro_core::{Category, Document, DocumentState, DocumentType};
///
/// let doc = Document {
///     id: "1".to_string(),
///     nombre: "Acta".to_string(),
///     descripcion: String::new(),
///     tipo: DocumentType::Pdf,
///     fecha_subida: chrono::Utc::now(),
///     estado: DocumentState::Activo,
///     categoria: Category::Administrativo,
///     subcategoria: "Acta".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Document {
    /// Unique identifier, assigned by the store
    pub id: String,
    /// Document name
    pub nombre: String,
    /// Free-form description
    #[serde(default)]
    pub descripcion: String,
    /// File type
    pub tipo: DocumentType,
    /// When the document was registered
    pub fecha_subida: DateTime<Utc>,
    /// Lifecycle state
    #[serde(default)]
    pub estado: DocumentState,
    /// Category
    pub categoria: Category,
    /// Subcategory, empty or one of the category's subcategories
    #[serde(default)]
    pub subcategoria: String,
}

impl Document {
    pub(crate) fn from_valid_draft(
        id: String,
        fecha_subida: DateTime<Utc>,
        fields: ValidDraft,
    ) -> Self {
        Self {
            id,
            nombre: fields.nombre,
            descripcion: fields.descripcion,
            tipo: fields.tipo,
            fecha_subida,
            estado: fields.estado,
            categoria: fields.categoria,
            subcategoria: fields.subcategoria,
        }
    }

    /// Replace every field except `id` and `fecha_subida`
    pub(crate) fn apply(&mut self, fields: ValidDraft) {
        self.nombre = fields.nombre;
        self.descripcion = fields.descripcion;
        self.tipo = fields.tipo;
        self.estado = fields.estado;
        self.categoria = fields.categoria;
        self.subcategoria = fields.subcategoria;
    }
}

/// Caller-supplied values for creating or updating a document
///
/// Required values are optional here so that incomplete input reaches the
/// store and is rejected there with a field-specific error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentDraft {
    /// Target document for updates; ignored by create
    pub id: Option<String>,
    pub nombre: String,
    pub descripcion: String,
    pub tipo: Option<DocumentType>,
    pub estado: DocumentState,
    pub categoria: Option<Category>,
    pub subcategoria: String,
}

impl DocumentDraft {
    /// Create a draft with the given name and everything else unset
    pub fn new(nombre: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_descripcion(mut self, descripcion: impl Into<String>) -> Self {
        self.descripcion = descripcion.into();
        self
    }

    pub fn with_tipo(mut self, tipo: DocumentType) -> Self {
        self.tipo = Some(tipo);
        self
    }

    pub fn with_estado(mut self, estado: DocumentState) -> Self {
        self.estado = estado;
        self
    }

    pub fn with_categoria(mut self, categoria: Category) -> Self {
        self.categoria = Some(categoria);
        self
    }

    pub fn with_subcategoria(mut self, subcategoria: impl Into<String>) -> Self {
        self.subcategoria = subcategoria.into();
        self
    }

    /// Change the category, clearing a subcategory that belonged to the old one
    pub fn set_categoria(&mut self, categoria: Category) {
        if self.categoria != Some(categoria) {
            self.subcategoria.clear();
        }
        self.categoria = Some(categoria);
    }
}

impl From<&Document> for DocumentDraft {
    fn from(doc: &Document) -> Self {
        Self {
            id: Some(doc.id.clone()),
            nombre: doc.nombre.clone(),
            descripcion: doc.descripcion.clone(),
            tipo: Some(doc.tipo),
            estado: doc.estado,
            categoria: Some(doc.categoria),
            subcategoria: doc.subcategoria.clone(),
        }
    }
}

/// Draft values that passed validation
#[derive(Debug, Clone)]
pub(crate) struct ValidDraft {
    pub nombre: String,
    pub descripcion: String,
    pub tipo: DocumentType,
    pub estado: DocumentState,
    pub categoria: Category,
    pub subcategoria: String,
}
