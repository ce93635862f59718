/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed expression type and its printer
/// - expressions: The node carried by each expression variant
/// - declarations: Prototypes and function definitions
pub mod ast;
pub mod declarations;
pub mod expressions;
