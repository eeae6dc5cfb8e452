//! Markup containment walk.
//!
//! Decides whether a declaration initializer renders any JSX. The walk
//! covers the shapes a component initializer realistically takes: concise
//! and block arrow bodies, function expressions, conditional renders, and
//! wrapper calls such as `memo(() => ...)`.

use oxc_ast::ast::{Expression, FunctionBody, Statement};

/// Whether an expression contains at least one JSX element or fragment.
pub(crate) fn contains_markup(expr: &Expression<'_>) -> bool {
    match expr {
        Expression::JSXElement(_) | Expression::JSXFragment(_) => true,

        // Arrow function body is always a FunctionBody; a concise arrow
        // stores its expression as a single ExpressionStatement
        Expression::ArrowFunctionExpression(arrow) => body_contains_markup(&arrow.body),

        Expression::FunctionExpression(func) => func
            .body
            .as_ref()
            .is_some_and(|body| body_contains_markup(body)),

        Expression::ParenthesizedExpression(paren) => contains_markup(&paren.expression),

        Expression::ConditionalExpression(cond) => {
            contains_markup(&cond.consequent) || contains_markup(&cond.alternate)
        }

        Expression::LogicalExpression(logical) => {
            contains_markup(&logical.left) || contains_markup(&logical.right)
        }

        Expression::SequenceExpression(seq) => seq.expressions.iter().any(contains_markup),

        // Wrapper calls: memo(() => <div/>), forwardRef(function (props) {...})
        Expression::CallExpression(call) => call
            .arguments
            .iter()
            .filter_map(|arg| arg.as_expression())
            .any(contains_markup),

        Expression::TSAsExpression(as_expr) => contains_markup(&as_expr.expression),

        _ => false,
    }
}

fn body_contains_markup(body: &FunctionBody<'_>) -> bool {
    body.statements.iter().any(statement_contains_markup)
}

fn statement_contains_markup(stmt: &Statement<'_>) -> bool {
    match stmt {
        Statement::ExpressionStatement(expr_stmt) => contains_markup(&expr_stmt.expression),

        Statement::ReturnStatement(ret) => {
            ret.argument.as_ref().is_some_and(|arg| contains_markup(arg))
        }

        Statement::IfStatement(if_stmt) => {
            statement_contains_markup(&if_stmt.consequent)
                || if_stmt
                    .alternate
                    .as_ref()
                    .is_some_and(|alt| statement_contains_markup(alt))
        }

        Statement::BlockStatement(block) => block.body.iter().any(statement_contains_markup),

        Statement::VariableDeclaration(decl) => decl.declarations.iter().any(|declarator| {
            declarator
                .init
                .as_ref()
                .is_some_and(|init| contains_markup(init))
        }),

        _ => false,
    }
}
