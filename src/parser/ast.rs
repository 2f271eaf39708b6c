/// `int <name>() { <body> }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub body: Stmt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    Return(ReturnStatement),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: i64,
}
