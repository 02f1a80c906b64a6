//! Arithmetic over plain numbers

use super::check_arity;
use crate::error::{SemanticError, SemanticResult};
use crate::semantics::Value;

fn binary(operation: &str, args: &[Value]) -> SemanticResult<(f64, f64)> {
    check_arity(operation, args, 2)?;
    Ok((args[0].as_number(operation)?, args[1].as_number(operation)?))
}

pub fn add(args: &[Value]) -> SemanticResult<Value> {
    let (a, b) = binary("Add", args)?;
    Ok(Value::Number(a + b))
}

pub fn sub(args: &[Value]) -> SemanticResult<Value> {
    let (a, b) = binary("Sub", args)?;
    Ok(Value::Number(a - b))
}

pub fn mul(args: &[Value]) -> SemanticResult<Value> {
    let (a, b) = binary("Mul", args)?;
    Ok(Value::Number(a * b))
}

pub fn div(args: &[Value]) -> SemanticResult<Value> {
    let (a, b) = binary("Div", args)?;
    if b == 0.0 {
        return Err(SemanticError::DivisionByZero);
    }
    Ok(Value::Number(a / b))
}

pub fn pow(args: &[Value]) -> SemanticResult<Value> {
    let (a, b) = binary("Pow", args)?;
    Ok(Value::Number(a.powf(b)))
}

pub fn sqrt(args: &[Value]) -> SemanticResult<Value> {
    check_arity("Sqrt", args, 1)?;
    let x = args[0].as_number("Sqrt")?;
    if x < 0.0 {
        return Err(SemanticError::DomainError(format!("square root of negative number {}", x)));
    }
    Ok(Value::Number(x.sqrt()))
}
