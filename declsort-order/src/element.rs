//! The element model
//!
//! An [`Element`] is the atomic unit being ordered: one top-level
//! declaration (or a detached banner header) reduced to its comparable
//! traits plus the exact text to re-emit. Elements are created once per
//! file pass, sorted in place, and never mutated afterwards.

/// Structural kind of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Header,
    Import,
    TypeImport,
    Enumeration,
    Type,
    Interface,
    Variable,
    Class,
    Function,
}

impl Kind {
    /// The value-name used for this kind in policy files
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Header => "Header",
            Kind::Import => "Import",
            Kind::TypeImport => "TypeImport",
            Kind::Enumeration => "Enumeration",
            Kind::Type => "Type",
            Kind::Interface => "Interface",
            Kind::Variable => "Variable",
            Kind::Class => "Class",
            Kind::Function => "Function",
        }
    }
}

/// Transfer trait: the declaration is exported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    IsExported,
}

/// Persistence trait: the declaration is a constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    IsConstant,
}

/// Declaration trait: the declaration is ambient (`declare`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    IsDeclared,
}

/// The classification axes a ranked comparator can be configured over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitAxis {
    Kind,
    Transfer,
    Persistence,
    Declaration,
}

impl TraitAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraitAxis::Kind => "kind",
            TraitAxis::Transfer => "transfer",
            TraitAxis::Persistence => "persistance",
            TraitAxis::Declaration => "declaration",
        }
    }
}

/// One orderable unit: a declaration or a detached header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: Option<Kind>,
    pub transfer: Option<Transfer>,
    pub persistence: Option<Persistence>,
    pub declaration: Option<Declaration>,
    /// Empty for elements with no natural name (headers, expression
    /// statements)
    pub name: String,
    /// Exact source text to emit, trimmed
    pub text: String,
}

impl Element {
    /// A detached banner header block
    pub fn header(text: String) -> Element {
        Element {
            kind: Some(Kind::Header),
            transfer: None,
            persistence: None,
            declaration: None,
            name: String::new(),
            text,
        }
    }

    /// The element's value on a classification axis, as the value-name
    /// used in policy files; `None` when the axis does not apply
    pub fn trait_value(&self, axis: TraitAxis) -> Option<&'static str> {
        match axis {
            TraitAxis::Kind => self.kind.map(|k| k.as_str()),
            TraitAxis::Transfer => self.transfer.map(|_| "IsExported"),
            TraitAxis::Persistence => self.persistence.map(|_| "IsConstant"),
            TraitAxis::Declaration => self.declaration.map(|_| "IsDeclared"),
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }
}
