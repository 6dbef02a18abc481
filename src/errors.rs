// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
// Defines the From conversions that let try! and ? work for our `Error`.
error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        ZeroSideLength {
            description("maze side length must be at least one")
            display("maze side length must be at least one cell")
        }
    }
}
