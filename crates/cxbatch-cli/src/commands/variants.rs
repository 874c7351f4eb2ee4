use crate::error::Result;
use cxbatch::core::selection::GroupPair;
use cxbatch::core::variant::AnalysisVariant;

pub fn run() -> Result<()> {
    print!("{}", describe_variants(&GroupPair::default()));
    Ok(())
}

fn describe_variants(groups: &GroupPair) -> String {
    let mut out = String::new();
    for variant in AnalysisVariant::ALL {
        out.push_str(&format!(
            "{} (output: <file>{})\n",
            variant.name(),
            variant.output_suffix()
        ));
        for command in variant.analysis_commands(groups) {
            out.push_str(&format!("    {}\n", command));
        }
    }
    out
}
