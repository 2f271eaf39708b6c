use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser as ArgParse, ValueEnum};
use clap_stdin::FileOrStdin;

use retcc::{analyzer, codegen, ir, lexer::Lexer, parser, CompileError};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Stage {
    /// Stop after lexing and print the tokens
    Tokens,
    /// Stop after parsing and print the syntax tree
    Ast,
    /// Stop after lowering and print the IR
    Ir,
    /// Run the whole pipeline and print assembly
    Asm,
}

#[derive(Debug, ArgParse)]
#[command(version, about = "Compiles `int main() { return N; }` to x86-64 assembly")]
struct Args {
    /// Source file, or `-` for stdin
    #[arg(default_value = "-")]
    input: FileOrStdin,

    /// Last pipeline stage to run
    #[arg(short, long, value_enum, default_value_t = Stage::Asm)]
    stage: Stage,

    /// Write the output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(user_input: &str, stage: Stage) -> Result<String, CompileError> {
    let tokens = Lexer::tokenize(user_input)?;
    if let Stage::Tokens = stage {
        return Ok(tokens
            .iter()
            .map(|t| format!("{:?} {:?}\n", t.kind, t.lexeme))
            .collect());
    }

    let func = parser::parse(tokens)?;
    if let Stage::Ast = stage {
        return Ok(format!("{:#?}\n", func));
    }

    analyzer::check(&func)?;
    let ir = ir::lower(&func);
    if let Stage::Ir = stage {
        return Ok(ir.iter().map(|i| format!("{}\n", i)).collect());
    }

    Ok(codegen::emit_program(&ir))
}

/// Echoes the offending source line with a caret under `offset`.
fn render_location(user_input: &str, offset: usize) -> String {
    let offset = offset.min(user_input.len());
    let line_start = user_input[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = user_input[offset..]
        .find('\n')
        .map_or(user_input.len(), |i| offset + i);
    let line_no = user_input[..line_start].matches('\n').count() + 1;
    let line = &user_input[line_start..line_end];
    let line = line.strip_suffix('\r').unwrap_or(line);
    // tabs stay tabs so the caret follows the echoed line
    let pad: String = user_input[line_start..offset]
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    format!("{:>5} | {}\n{:>5} | {}^", line_no, line, "", pad)
}

fn write_output(out: &str, path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, out),
        None => {
            print!("{}", out);
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let user_input = match args.input.contents() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: failed to read input: {}", e);
            process::exit(1);
        }
    };

    let out = match run(&user_input, args.stage) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("error: {}", e);
            if let Some(offset) = e.offset() {
                eprintln!("{}", render_location(&user_input, offset));
            }
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&out, args.output.as_deref()) {
        let target = args
            .output
            .as_deref()
            .map_or("stdout".to_string(), |p| p.display().to_string());
        eprintln!("error: failed to write {}: {}", target, e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "int main() { return 42; }";

    #[test]
    fn stage_tokens() {
        let out = run(SOURCE, Stage::Tokens).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Int \"int\"");
        assert_eq!(lines[6], "Num \"42\"");
    }

    #[test]
    fn stage_ast() {
        let out = run(SOURCE, Stage::Ast).unwrap();
        assert!(out.starts_with("FunctionDeclaration {"));
        assert!(out.contains("value: 42"));

        // the name is only checked past this stage
        assert!(run("int foo() { return 1; }", Stage::Ast).is_ok());
    }

    #[test]
    fn stage_ir() {
        assert_eq!(run(SOURCE, Stage::Ir).unwrap(), "LOAD_CONST 42\nRETURN\n");
        assert!(matches!(
            run("int foo() { return 1; }", Stage::Ir),
            Err(CompileError::Semantic(_))
        ));
    }

    #[test]
    fn stage_asm() {
        assert_eq!(
            run(SOURCE, Stage::Asm).unwrap(),
            ".intel_syntax noprefix\n.globl main\nmain:\n  mov rax, 42\n  ret\n"
        );
        assert!(matches!(
            run("int main() { return @; }", Stage::Asm),
            Err(CompileError::Lexical(_))
        ));
    }

    #[test]
    fn output_file() {
        let path = std::env::temp_dir().join(format!("retcc-{}.s", process::id()));
        let out = run(SOURCE, Stage::Asm).unwrap();
        write_output(&out, Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), out);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn location_on_first_line() {
        assert_eq!(
            render_location("int main() { return @; }", 20),
            "    1 | int main() { return @; }\n      |                     ^"
        );
    }

    #[test]
    fn location_with_crlf_and_tabs() {
        assert_eq!(
            render_location("int main() {\r\n\treturn @;\r\n}", 22),
            "    2 | \treturn @;\n      | \t       ^"
        );
    }

    #[test]
    fn location_at_end_of_input() {
        let user_input = "int main() {\n  return 1;";
        let offset = run(user_input, Stage::Asm).unwrap_err().offset().unwrap();
        assert_eq!(
            render_location(user_input, offset),
            "    2 |   return 1;\n      |            ^"
        );
    }
}
