pub mod deserializers;
