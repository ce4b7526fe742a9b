mod tests_batch;
mod tests_confusion_matrix;
