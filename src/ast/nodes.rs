use super::operators::{InfixOperator, PrefixOperator, SuffixOperator, Visibility};
use std::fmt;

/// A non-empty run of letters and digits. No keyword filtering happens
/// at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty());
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered, non-empty sequence of identifiers joined by `.`,
/// naming a package, type or member path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedIdentifier {
    pub identifiers: Vec<Identifier>,
}

impl ComposedIdentifier {
    pub fn new(identifiers: Vec<Identifier>) -> Self {
        debug_assert!(!identifiers.is_empty());
        Self { identifiers }
    }

    /// Build from plain segment strings, mainly for tests
    pub fn from_segments<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self::new(segments.into_iter().map(Identifier::new).collect())
    }
}

impl fmt::Display for ComposedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identifier) in self.identifiers.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", identifier)?;
        }
        Ok(())
    }
}

/// A package name in the Java sense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName {
    pub composed: ComposedIdentifier,
}

impl PackageName {
    pub fn new(composed: ComposedIdentifier) -> Self {
        Self { composed }
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.composed.identifiers
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.composed)
    }
}

/// The `package a.b.c;` declaration that opens a compilation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStatement {
    pub package_name: PackageName,
}

impl fmt::Display for PackageStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "package {};", self.package_name)
    }
}

/// A single `import a.b.C;` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub package_name: PackageName,
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {};", self.package_name)
    }
}

/// A value written out in source (also called a constant)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Integer(i64),
    Long(i64),
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{}", value),
            Literal::Long(value) => write!(f, "{}L", value),
            Literal::Str(value) => {
                f.write_str("\"")?;
                for ch in value.chars() {
                    match ch {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        _ => write!(f, "{}", ch)?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// An annotation adorning a class declaration, e.g. `@Number(11)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: Identifier,
    pub arguments: Vec<Literal>,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}(", self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", argument)?;
        }
        f.write_str(")")
    }
}

/// A class header: visibility, name, optional base class and optional
/// single annotation. Bodies are outside this grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub visibility: Visibility,
    pub name: Identifier,
    pub base_class: Option<Identifier>,
    pub annotation: Option<Annotation>,
}

impl fmt::Display for ClassDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref annotation) = self.annotation {
            writeln!(f, "{}", annotation)?;
        }
        write!(f, "{} class {}", self.visibility, self.name)?;
        if let Some(ref base_class) = self.base_class {
            write!(f, " extends {}", base_class)?;
        }
        Ok(())
    }
}

/// The file-level root: one package statement, the imports in
/// declaration order, and exactly one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    pub package: PackageStatement,
    pub imports: Vec<ImportStatement>,
    pub class: ClassDefinition,
}

impl fmt::Display for CompilationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.package)?;
        for import in &self.imports {
            writeln!(f, "{}", import)?;
        }
        write!(f, "{}", self.class)
    }
}

// Expressions

/// A code fragment that produces a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Literal),
    Name(ComposedIdentifier),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    Suffix(SuffixExpression),
    Ternary(TernaryExpression),
    Cast(CastExpression),
    Instancing(Instancing),
    MethodCall(MethodCall),
    ArrayInitialization(ArrayInitialization),
}

/// An expression modified by a leading operator, e.g. `++x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    pub operator: PrefixOperator,
    pub expression: Box<Expression>,
}

/// Two expressions with an operator between them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub operator: InfixOperator,
    pub right: Box<Expression>,
}

/// An expression with a trailing operator, e.g. `x++`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixExpression {
    pub expression: Box<Expression>,
    pub operator: SuffixOperator,
}

/// `condition ? whenTrue : whenFalse`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TernaryExpression {
    pub condition: Box<Expression>,
    pub when_true: Box<Expression>,
    pub when_false: Box<Expression>,
}

/// `(Type) expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastExpression {
    pub target_type: ComposedIdentifier,
    pub expression: Box<Expression>,
}

/// `new Type(arguments)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instancing {
    pub target_type: ComposedIdentifier,
    pub arguments: Vec<Expression>,
}

/// `a.b.method(arguments)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub identifier: ComposedIdentifier,
    pub arguments: Vec<Expression>,
}

/// `{ literal, literal };` — the trailing `;` is part of this form's
/// surface syntax, not a general expression terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayInitialization {
    pub literals: Vec<Literal>,
}

fn write_arguments(f: &mut fmt::Formatter<'_>, arguments: &[Expression]) -> fmt::Result {
    f.write_str("(")?;
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", argument)?;
    }
    f.write_str(")")
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{}", literal),
            Expression::Name(name) => write!(f, "{}", name),
            Expression::Prefix(prefix) => write!(f, "{}", prefix),
            Expression::Infix(infix) => write!(f, "{}", infix),
            Expression::Suffix(suffix) => write!(f, "{}", suffix),
            Expression::Ternary(ternary) => write!(f, "{}", ternary),
            Expression::Cast(cast) => write!(f, "{}", cast),
            Expression::Instancing(instancing) => write!(f, "{}", instancing),
            Expression::MethodCall(call) => write!(f, "{}", call),
            Expression::ArrayInitialization(array) => write!(f, "{}", array),
        }
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.expression)
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

impl fmt::Display for SuffixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.expression, self.operator)
    }
}

impl fmt::Display for TernaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ? {} : {}",
            self.condition, self.when_true, self.when_false
        )
    }
}

impl fmt::Display for CastExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.target_type, self.expression)
    }
}

impl fmt::Display for Instancing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "new {}", self.target_type)?;
        write_arguments(f, &self.arguments)
    }
}

impl fmt::Display for MethodCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        write_arguments(f, &self.arguments)
    }
}

impl fmt::Display for ArrayInitialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return f.write_str("{ };");
        }
        f.write_str("{ ")?;
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", literal)?;
        }
        f.write_str(" };")
    }
}
