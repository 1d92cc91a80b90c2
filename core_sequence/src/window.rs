//! Оконные операции: `chunk`, `skip`, `take`.

use tracing::{error, trace};

use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Разбивает последовательность на подряд идущие части длиной не более `size`.
    ///
    /// Последняя часть может быть короче. Пустая последовательность дает
    /// пустой внешний вектор (ноль частей), а не вектор с одной пустой частью.
    ///
    /// # Паника
    /// Паникует, если `size < 1`: это нарушение контракта вызывающей стороной.
    #[must_use]
    pub fn chunk(&self, size: usize) -> Vec<Vec<T>> {
        if size < 1 {
            error!(size, "chunk called with a size lower than 1");
            panic!("size can not be lower than 1");
        }
        let chunks: Vec<Vec<T>> = self.data.chunks(size).map(<[T]>::to_vec).collect();
        trace!(size, chunks = chunks.len(), "sequence chunked");
        chunks
    }

    /// Пропускает первые `count` элементов. Если `count >= len()`, результат пуст.
    #[must_use]
    pub fn skip(&self, count: usize) -> Self {
        self.data.iter().skip(count).cloned().collect()
    }

    /// Берет первые `count` элементов. Если `count >= len()`, результат будет полной копией.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.data.iter().take(count).cloned().collect()
    }
}
