pub type BoxedReader = Box<dyn std::io::Read>;

pub type BoxedWriter = Box<dyn std::io::Write>;
