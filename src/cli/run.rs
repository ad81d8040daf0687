use miette::Result;

use reminisce::{parse, tokenize, GrammarError};

pub fn run(code: &str, debug: bool) -> Result<()> {
    if debug {
        println!("Tokens:\n{:?}", tokenize(code));
    }

    let signature = parse(code).map_err(GrammarError::into_err_report)?;
    if debug {
        println!("Patterns:\n{:#?}", signature.patterns());
    }

    println!("arity: {}", signature.arity());
    println!("names: {}", signature.names().join(", "));
    println!("canonical: {signature}");

    Ok(())
}

pub fn print_tokens(code: &str) {
    for token in tokenize(code) {
        println!("{token:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_grammar_errors() {
        let error = run("{foo:}", false).unwrap_err();
        assert!(error.to_string().contains("expected an identifier after colon"));
        assert!(run("(foo", false).is_err());
        assert!(run("label, {x, ypos: y}: point", false).is_err());
    }

    #[test]
    fn accepts_valid_patterns() {
        assert!(run("", false).is_ok());
        assert!(run("{label, {x, ypos: y}: point}", true).is_ok());
    }
}
