use caract::prelude::*;

fn main() -> Result<(), MountError> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let element = jsx! {
        <div style="background: salmon">
            <h1>"Hello World"</h1>
            <h2 style="text-align:right">"from Caract"</h2>
        </div>
    };

    caract::mount(&element, "root").inspect_err(|err| tracing::error!("{err}"))
}
