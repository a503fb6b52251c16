// src/collections/mod.rs

use core::fmt;
use core::hash::Hasher;

use log::{debug, trace};
use twox_hash::XxHash64;

use crate::course::Course;

/// Bucket count used when none is configured. Prime, to spread typical
/// catalog sizes without clustering.
pub const DEFAULT_SIZE: usize = 179;

const HASH_SEED: u64 = 0;

// One link of a bucket chain. The head link lives in the bucket array itself,
// every later link is owned by its predecessor.
struct Node {
    bucket: usize,
    course: Course,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(course: Course, bucket: usize) -> Self {
        Self {
            bucket,
            course,
            next: None,
        }
    }
}

/// Hash table with separate chaining over a fixed bucket array.
///
/// The bucket array is allocated once by the constructor and never grows,
/// shrinks or shifts; `None` marks an empty slot. Records that land on the
/// same slot form a singly-linked chain in insertion order.
pub struct HashTable {
    buckets: Vec<Option<Node>>,
    len: usize,
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
         .field("buckets", &self.buckets.len())
         .field("len", &self.len)
         .field("courses", &self.iter().map(Course::id).collect::<Vec<_>>())
         .finish()
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }

    /// A table with `size` buckets. A size of zero is bumped to one.
    pub fn with_size(size: usize) -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(size.max(1), || None);
        Self { buckets, len: 0 }
    }

    /// Number of live records (heads plus chained nodes).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the bucket array. Fixed for the lifetime of the table.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The slot `course_id` hashes to. Every lookup, insert and removal goes
    /// through here.
    pub fn slot_of(&self, course_id: &str) -> usize {
        let mut hasher = XxHash64::with_seed(HASH_SEED);
        hasher.write(course_id.as_bytes());
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Stores `course` at the tail of its slot's chain. No duplicate check is
    /// made: a second record with the same id is chained behind the first and
    /// stays hidden from `search` until the first is removed.
    pub fn insert(&mut self, course: Course) {
        let bucket = self.slot_of(course.id());
        trace!("insert {} into bucket {}", course.id(), bucket);

        let slot = &mut self.buckets[bucket];
        match slot {
            None => *slot = Some(Node::new(course, bucket)),
            Some(head) => {
                let mut link = &mut head.next;
                while let Some(node) = link {
                    link = &mut node.next;
                }
                *link = Some(Box::new(Node::new(course, bucket)));
            }
        }
        self.len += 1;
    }

    /// First record in chain order whose id equals `course_id`.
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        let mut cursor = self.buckets[self.slot_of(course_id)].as_ref();
        while let Some(node) = cursor {
            if node.course.id() == course_id {
                return Some(&node.course);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    /// Like `get`, but hands back an owned copy of the record.
    pub fn search(&self, course_id: &str) -> Option<Course> {
        self.get(course_id).cloned()
    }

    pub fn contains_key(&self, course_id: &str) -> bool {
        self.get(course_id).is_some()
    }

    /// Unlinks the first record matching `course_id` and returns it. Absent
    /// ids leave the table untouched.
    ///
    /// A matching head is either reset to empty in place or replaced by the
    /// second node of its chain; a matching chained node is spliced out. The
    /// bucket array itself is never resized.
    pub fn remove(&mut self, course_id: &str) -> Option<Course> {
        let bucket = self.slot_of(course_id);
        let slot = &mut self.buckets[bucket];

        let head_matches = match slot {
            None => return None,
            Some(head) => head.course.id() == course_id,
        };

        if head_matches {
            let mut head = slot.take()?;
            match head.next.take() {
                Some(second) => {
                    debug!("promote {} to head of bucket {}", second.course.id(), bucket);
                    *slot = Some(*second);
                }
                None => debug!("bucket {} reset to empty", bucket),
            }
            self.len -= 1;
            trace!("removed {} from head of bucket {}", course_id, head.bucket);
            return Some(head.course);
        }

        let mut cursor = slot.as_mut()?;
        loop {
            let next_matches = match cursor.next.as_deref() {
                None => return None,
                Some(next) => next.course.id() == course_id,
            };
            if next_matches {
                let mut removed = cursor.next.take()?;
                cursor.next = removed.next.take();
                self.len -= 1;
                trace!("removed {} from chain of bucket {}", course_id, removed.bucket);
                return Some(removed.course);
            }
            cursor = cursor.next.as_deref_mut()?;
        }
    }

    /// Every live record, stably sorted ascending by id. Records sharing an id
    /// keep their chain order.
    pub fn sorted(&self) -> Vec<Course> {
        let mut courses: Vec<Course> = self.iter().cloned().collect();
        courses.sort_by(|a, b| a.id().cmp(b.id()));
        courses
    }

    /// Records in bucket order, each chain walked head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Number of records chained on `slot`; zero for empty or out of range.
    pub fn chain_len(&self, slot: usize) -> usize {
        let mut cursor = self.buckets.get(slot).and_then(Option::as_ref);
        let mut count = 0;
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next.as_deref();
        }
        count
    }

    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            release_chain(slot.take());
        }
        self.len = 0;
    }
}

// Drops a chain link by link so long chains never recurse through Box drops.
fn release_chain(head: Option<Node>) {
    let mut next = head.and_then(|mut node| node.next.take());
    while let Some(mut node) = next {
        next = node.next.take();
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        self.clear();
    }
}

pub struct Iter<'a> {
    buckets: core::slice::Iter<'a, Option<Node>>,
    chain: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain.take() {
                self.chain = node.next.as_deref();
                return Some(&node.course);
            }
            self.chain = self.buckets.next()?.as_ref();
        }
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Course> for HashTable {
    fn extend<T: IntoIterator<Item = Course>>(&mut self, iter: T) {
        for course in iter {
            self.insert(course);
        }
    }
}
