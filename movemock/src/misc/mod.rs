mod parameters_ex;
mod string_ex;

pub(crate) use parameters_ex::ParametersEx;
pub(crate) use string_ex::StringEx;
