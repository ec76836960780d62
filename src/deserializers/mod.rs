mod color_deserializer;
mod coordinate_deserializer;
