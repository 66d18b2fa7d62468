pub mod base64_image_decoder;
