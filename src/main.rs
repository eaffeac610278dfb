use ratecard::app::App;
use ratecard::cli::Cli;
use ratecard::router;

fn main() -> miette::Result<()> {
    ratecard::init_tracing();

    let mut ctx = App::new(Cli::new())?;

    let report = router::route(&mut ctx)?;

    let output_message = report.render(ctx.cli.unformatted, ctx.cli.currency)?;

    // CSV already ends with a newline, the scalar and JSON reports don't.
    if output_message.ends_with('\n') {
        print!("{}", output_message);
    } else {
        println!("{}", output_message);
    }

    Ok(())
}
