use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Geometry of a 1 Mi slot table
      %BINARY_NAME% --log-slots 20 info

      # Insert 900K sequential keys into a table sized for 1M slots
      %BINARY_NAME% --capacity 1M fill 900K

      # Run an operation script from a file
      %BINARY_NAME% run ops.txt

      # Run an operation script from stdin
      printf 'insert 1 100\nlookup 1\nremove 1 100\nlookup 1\n' | %BINARY_NAME% run

    Script operations:
      insert <key> <value>    -> inserted | full
      remove <key> <value>    -> removed | not found
      lookup <key>            -> <value> | not found
      contains <key>          -> true | false
      stats                   -> len=<n> load_factor=<f> full_blocks=<n>

    Blank lines and text after `#` are ignored.
"#};
