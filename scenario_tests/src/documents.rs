//! Import scenarios: grids that round-tripped through the document format
