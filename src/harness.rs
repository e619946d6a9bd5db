use crate::error::Error;
use crate::registry::Registry;
use crate::value::Value;

/// A single step of an action script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Invoke the selected function with the given arguments.
    Call(Vec<Value>),
    /// Read the selected function's call counter.
    GetCallCount,
}

/// Runs an action script against a named function.
///
/// Actions execute strictly in order and each observation lands at the same
/// position as the action that produced it. A failing call aborts the script
/// and surfaces the error unchanged.
pub fn run(
    registry: &Registry,
    name: &str,
    script: &[Action],
) -> Result<Vec<Value>, Error> {
    let function = registry.get(name)?;
    let mut observations = Vec::with_capacity(script.len());
    for action in script {
        match action {
            Action::Call(args) => observations.push(function.invoke(args)?),
            Action::GetCallCount => {
                observations.push(Value::Int(function.call_count() as i64));
            }
        }
    }
    Ok(observations)
}
