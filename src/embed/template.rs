//! Placeholder substitution for embedded assets.

use std::marker::PhantomData;

/// Values injected into an embedded asset.
///
/// Each pair is `(placeholder, value)`; every occurrence of the placeholder
/// is replaced. The placeholders must survive minification (`build.rs`
/// checks this).
pub trait TemplateVars {
    fn placeholders(&self) -> Vec<(&'static str, String)>;
}

/// Asset without placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVars;

impl TemplateVars for NoVars {
    fn placeholders(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Static source typed by the variables it accepts.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    source: &'static str,
    vars: PhantomData<fn(&V)>,
}

impl<V: TemplateVars> Template<V> {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            vars: PhantomData,
        }
    }

    pub fn render(&self, vars: &V) -> String {
        vars.placeholders()
            .iter()
            .fold(self.source.to_owned(), |out, (placeholder, value)| {
                out.replace(placeholder, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting(&'static str);

    impl TemplateVars for Greeting {
        fn placeholders(&self) -> Vec<(&'static str, String)> {
            vec![("__NAME__", self.0.to_owned())]
        }
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        const HELLO: Template<Greeting> = Template::new("hello __NAME__, bye __NAME__");
        assert_eq!(HELLO.render(&Greeting("nb")), "hello nb, bye nb");
    }

    #[test]
    fn test_no_vars_is_identity() {
        const RAW: Template<NoVars> = Template::new("a { color: red }");
        assert_eq!(RAW.render(&NoVars), "a { color: red }");
    }
}
