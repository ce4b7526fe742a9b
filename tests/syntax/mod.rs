mod tests_formatter;
mod tests_span_index;
