use movemock_syntax::FunctionDecl;

use crate::misc::StringEx;

/// Name prefix of all properties generated for `function`.
///
/// `foo(text:count:)` becomes `fooTextCount`, wildcard labels are skipped so
/// `fetch(_ name:)` becomes `fetch`.
pub fn text(function: &FunctionDecl) -> String {
    let mut ret = function.name.clone();

    for label in function
        .signature
        .parameters
        .iter()
        .filter_map(|p| p.external_label())
    {
        ret.push_str(&label.capitalizing_first_letter());
    }

    ret
}
